//! XML documents shared by the integration tests.

/// `/a/b` exists without any attributes.
pub const MINIMAL: &str = "<a><b/></a>";

/// A small aircraft description with typed attributes and repeated children.
pub const AIRCRAFT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<cpacs version="3.4">
  <header>
    <name>D150</name>
    <timestamp>2024-05-01T12:30:15Z</timestamp>
    <updates>
      <update valid="true" count="2">first</update>
      <update valid="0">second</update>
    </updates>
  </header>
  <vehicles>
    <aircraft uID="D150" span="34.1" engines="2" flag="5">
      <wing>1</wing>
      <wing>2</wing>
      <wing>3</wing>
    </aircraft>
  </vehicles>
</cpacs>"#;

/// A document with a prefixed root and children.
pub const NAMESPACED: &str = r#"<c:cpacs xmlns:c="urn:cpacs"><c:header><c:name>ns</c:name></c:header></c:cpacs>"#;

/// Two numbered items under one parent.
pub const ITEMS: &str = "<a><n><item>1</item><item>2</item></n></a>";

/// A single element with text.
pub const KEEP: &str = "<a><b>keep</b></a>";
