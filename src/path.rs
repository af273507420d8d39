//! Parent/leaf decomposition of element paths.
//!
//! Element creation and child counting in the backend take the parent path
//! and the child name separately, so every such call splits its path first.

/// A path split at its last `/`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitXPath {
    pub parent_xpath: String,
    pub element: String,
}

/// Splits `xpath` at the last `/`.
///
/// Without a separator the parent is empty and the whole input is the element.
pub fn split_xpath(xpath: &str) -> SplitXPath {
    match xpath.rfind('/') {
        Some(pos) => SplitXPath {
            parent_xpath: xpath[..pos].to_string(),
            element: xpath[pos + 1..].to_string(),
        },
        None => SplitXPath {
            parent_xpath: String::new(),
            element: xpath.to_string(),
        },
    }
}
