//! Reading documents with roxmltree and writing them with quick-xml.
//!
//! Both directions walk the tree with an explicit stack, so nesting depth is
//! bounded by memory rather than by the call stack.

use crate::error::DocumentError;
use crate::tree::{NodeId, XmlTree};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use roxmltree::Node;

const XML_NAMESPACE_PREFIX: &str = "xml";

/// Parses XML text into an element tree.
pub fn parse_document(text: &str) -> Result<XmlTree, DocumentError> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    let mut tree = XmlTree::new(qualified_name(root));

    let mut pending = vec![(tree.root(), root, None)];
    while let Some((id, node, parent)) = pending.pop() {
        fill_element(&mut tree, id, node, parent);
        for child in node.children().filter(Node::is_element) {
            let child_id = tree.append_child(id, qualified_name(child));
            pending.push((child_id, child, Some(node)));
        }
    }
    Ok(tree)
}

fn qualified_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    prefixed(node, tag.namespace(), tag.name())
}

fn prefixed(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

/// Copies namespaces, attributes and text of `node`. Child elements are
/// appended by the caller.
fn fill_element(tree: &mut XmlTree, id: NodeId, node: Node<'_, '_>, parent: Option<Node<'_, '_>>) {
    for ns in node.namespaces() {
        if ns.name() == Some(XML_NAMESPACE_PREFIX) {
            continue;
        }
        let inherited = parent.is_some_and(|p| {
            p.namespaces()
                .any(|other| other.name() == ns.name() && other.uri() == ns.uri())
        });
        if !inherited {
            tree.element_mut(id)
                .namespaces
                .push((ns.name().map(str::to_string), ns.uri().to_string()));
        }
    }

    for attr in node.attributes() {
        let name = prefixed(node, attr.namespace(), attr.name());
        tree.set_attribute(id, &name, attr.value());
    }

    let mut text = String::new();
    let mut has_child_elements = false;
    for child in node.children() {
        if child.is_element() {
            has_child_elements = true;
        } else if let Some(fragment) = child.text().filter(|_| child.is_text()) {
            text.push_str(fragment);
        }
    }
    // Indentation between child elements is not content.
    if has_child_elements && text.trim().is_empty() {
        text.clear();
    }
    tree.element_mut(id).text = text;
}

enum Visit {
    Open(NodeId),
    Close(NodeId),
}

/// Serializes the tree, including the XML declaration.
pub fn write_document(tree: &XmlTree) -> Result<String, DocumentError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut pending = vec![Visit::Open(tree.root())];
    while let Some(visit) = pending.pop() {
        match visit {
            Visit::Open(id) => {
                let element = tree.element(id);
                let start = start_tag(tree, id);
                if element.text.is_empty() && element.children.is_empty() {
                    writer.write_event(Event::Empty(start))?;
                    continue;
                }
                writer.write_event(Event::Start(start))?;
                if !element.text.is_empty() {
                    writer.write_event(Event::Text(BytesText::new(&element.text)))?;
                }
                pending.push(Visit::Close(id));
                pending.extend(element.children.iter().rev().map(|&child| Visit::Open(child)));
            }
            Visit::Close(id) => {
                let name = tree.element(id).name.as_str();
                writer.write_event(Event::End(BytesEnd::new(name)))?;
            }
        }
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

fn start_tag(tree: &XmlTree, id: NodeId) -> BytesStart<'_> {
    let element = tree.element(id);
    let mut start = BytesStart::new(element.name.as_str());
    for (prefix, uri) in &element.namespaces {
        let key = match prefix {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        start.push_attribute((key.as_str(), uri.as_str()));
    }
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    start
}
