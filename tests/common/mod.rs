pub mod fixtures;

use tixi_helper::{DocumentHandle, InMemoryTixi};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A store holding one open document.
pub struct OpenDocument {
    pub tixi: InMemoryTixi,
    pub handle: DocumentHandle,
}

/// Opens `xml` in a fresh in-memory store.
pub fn open(xml: &str) -> Result<OpenDocument, Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut tixi = InMemoryTixi::new();
    let handle = tixi
        .open_document_from_str(xml)
        .map_err(|code| format!("failed to open fixture: {code}"))?;
    Ok(OpenDocument { tixi, handle })
}
