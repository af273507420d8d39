//! Handle table and [`TixiBackend`] implementation.

use crate::io::{parse_document, write_document};
use crate::path::{parse_path, resolve_unique, select};
use crate::tree::{NodeId, XmlTree, is_xml_name};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::str::FromStr;
use tixi_traits::{Status, TixiBackend};
use tixi_types::{DocumentHandle, ReturnCode};

const XML_NAMESPACE_PREFIX: &str = "xml";

#[derive(Debug)]
struct Document {
    tree: XmlTree,
    registered_prefixes: HashSet<String>,
}

impl Document {
    fn new(tree: XmlTree) -> Self {
        Self {
            tree,
            registered_prefixes: HashSet::from([XML_NAMESPACE_PREFIX.to_string()]),
        }
    }

    fn resolve(&self, xpath: &str) -> Status<NodeId> {
        resolve_unique(&self.tree, xpath, &self.registered_prefixes)
    }

    fn attribute(&self, xpath: &str, attribute: &str) -> Status<&str> {
        if attribute.is_empty() {
            return Err(ReturnCode::NoAttributeName);
        }
        let id = self.resolve(xpath)?;
        self.tree
            .element(id)
            .attribute(attribute)
            .ok_or(ReturnCode::AttributeNotFound)
    }

    fn text(&self, xpath: &str) -> Status<&str> {
        let id = self.resolve(xpath)?;
        Ok(self.tree.element(id).text.as_str())
    }

    fn set_attribute(&mut self, xpath: &str, attribute: &str, value: String) -> Status {
        check_name(attribute, ReturnCode::NoAttributeName)?;
        let id = self.resolve(xpath)?;
        self.tree.set_attribute(id, attribute, value);
        Ok(())
    }

    fn append_element(&mut self, parent_xpath: &str, element: &str, text: String) -> Status {
        check_name(element, ReturnCode::NoElementName)?;
        let parent = self.resolve(parent_xpath)?;
        let id = self.tree.append_child(parent, element);
        self.tree.element_mut(id).text = text;
        Ok(())
    }
}

fn check_name(name: &str, missing: ReturnCode) -> Status {
    if name.is_empty() {
        Err(missing)
    } else if !is_xml_name(name) {
        Err(ReturnCode::InvalidXmlName)
    } else {
        Ok(())
    }
}

fn parse_number<T: FromStr>(text: &str) -> Status<T> {
    text.trim().parse().map_err(|_| ReturnCode::NoNumber)
}

/// `true`/`false` map to 1/0; an integer is passed through as the flag.
fn parse_boolean(text: &str) -> Status<i32> {
    match text.trim() {
        t if t.eq_ignore_ascii_case("true") => Ok(1),
        t if t.eq_ignore_ascii_case("false") => Ok(0),
        t => t.parse().map_err(|_| ReturnCode::Failed),
    }
}

/// A TIXI backend that keeps documents in process memory.
///
/// Documents are parsed with roxmltree on open and written with quick-xml on
/// export. Handles start at 1 and are never reused within one store.
///
/// # Example
///
/// ```ignore
/// let mut tixi = InMemoryTixi::new();
/// let handle = tixi.create_document("cpacs")?;
/// tixi.add_text_element(handle, "/cpacs", "header", "")?;
/// let xml = tixi.export_document_as_string(handle)?;
/// ```
#[derive(Debug)]
pub struct InMemoryTixi {
    documents: HashMap<DocumentHandle, Document>,
    next_handle: i32,
}

impl Default for InMemoryTixi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTixi {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            next_handle: 1,
        }
    }

    fn insert(&mut self, tree: XmlTree) -> DocumentHandle {
        let handle = DocumentHandle::new(self.next_handle);
        self.next_handle += 1;
        self.documents.insert(handle, Document::new(tree));
        handle
    }

    fn document(&self, handle: DocumentHandle) -> Status<&Document> {
        self.documents.get(&handle).ok_or(ReturnCode::InvalidHandle)
    }

    fn document_mut(&mut self, handle: DocumentHandle) -> Status<&mut Document> {
        self.documents
            .get_mut(&handle)
            .ok_or(ReturnCode::InvalidHandle)
    }

    /// Opens and parses the XML file at `path`.
    pub fn open_document(&mut self, path: impl AsRef<Path>) -> Status<DocumentHandle> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| {
            debug!("Failed to read '{}': {}", path.display(), err);
            ReturnCode::OpenFailed
        })?;
        self.open_document_from_str(&text)
    }

    /// Parses a document held in memory.
    pub fn open_document_from_str(&mut self, xml: &str) -> Status<DocumentHandle> {
        let tree = parse_document(xml).map_err(|err| {
            debug!("Document is not well formed: {}", err);
            ReturnCode::NotWellFormed
        })?;
        Ok(self.insert(tree))
    }

    /// Creates an empty document with a single root element.
    pub fn create_document(&mut self, root_name: &str) -> Status<DocumentHandle> {
        check_name(root_name, ReturnCode::NoElementName)?;
        Ok(self.insert(XmlTree::new(root_name)))
    }

    pub fn export_document_as_string(&self, handle: DocumentHandle) -> Status<String> {
        let document = self.document(handle)?;
        write_document(&document.tree).map_err(|err| {
            debug!("Failed to serialize document {}: {}", handle, err);
            ReturnCode::Failed
        })
    }

    /// Serializes the document and writes it to `path`.
    pub fn save_document(&self, handle: DocumentHandle, path: impl AsRef<Path>) -> Status {
        let xml = self.export_document_as_string(handle)?;
        let path = path.as_ref();
        std::fs::write(path, xml).map_err(|err| {
            debug!("Failed to write '{}': {}", path.display(), err);
            ReturnCode::CloseFailed
        })
    }

    /// Releases the document. The handle is invalid afterwards.
    pub fn close_document(&mut self, handle: DocumentHandle) -> Status {
        self.documents
            .remove(&handle)
            .map(|_| ())
            .ok_or(ReturnCode::InvalidHandle)
    }

    /// Number of open documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl TixiBackend for InMemoryTixi {
    fn register_namespaces_from_document(&mut self, handle: DocumentHandle) -> Status {
        let document = self.document_mut(handle)?;
        let tree = &document.tree;
        let declared: Vec<String> = tree
            .descendants()
            .flat_map(move |id| tree.element(id).namespaces.iter())
            .filter_map(|(prefix, _)| prefix.clone())
            .collect();
        debug!(
            "Registering {} namespace prefix(es) for document {}",
            declared.len(),
            handle
        );
        document.registered_prefixes.extend(declared);
        Ok(())
    }

    fn check_element(&self, handle: DocumentHandle, xpath: &str) -> Status {
        let document = self.document(handle)?;
        let steps = parse_path(xpath)?;
        let matches = select(&document.tree, &steps, &document.registered_prefixes)?;
        if matches.is_empty() {
            Err(ReturnCode::ElementNotFound)
        } else {
            Ok(())
        }
    }

    fn check_attribute(&self, handle: DocumentHandle, xpath: &str, attribute: &str) -> Status {
        self.document(handle)?.attribute(xpath, attribute).map(|_| ())
    }

    fn get_named_children_count(
        &self,
        handle: DocumentHandle,
        parent_xpath: &str,
        child_name: &str,
    ) -> Status<i32> {
        if child_name.is_empty() {
            return Err(ReturnCode::NoElementName);
        }
        if child_name != "*" && !is_xml_name(child_name) {
            return Err(ReturnCode::InvalidXmlName);
        }
        let document = self.document(handle)?;
        let parent = document.resolve(parent_xpath)?;
        let count = document
            .tree
            .element(parent)
            .children
            .iter()
            .filter(|&&child| {
                child_name == "*" || document.tree.element(child).name == child_name
            })
            .count();
        i32::try_from(count).map_err(|_| ReturnCode::IndexOutOfRange)
    }

    fn get_text_attribute(
        &self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status<String> {
        self.document(handle)?
            .attribute(xpath, attribute)
            .map(str::to_string)
    }

    fn get_double_attribute(
        &self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status<f64> {
        parse_number(self.document(handle)?.attribute(xpath, attribute)?)
    }

    fn get_boolean_attribute(
        &self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status<i32> {
        parse_boolean(self.document(handle)?.attribute(xpath, attribute)?)
    }

    fn get_integer_attribute(
        &self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status<i32> {
        parse_number(self.document(handle)?.attribute(xpath, attribute)?)
    }

    fn get_text_element(&self, handle: DocumentHandle, xpath: &str) -> Status<String> {
        self.document(handle)?.text(xpath).map(str::to_string)
    }

    fn get_double_element(&self, handle: DocumentHandle, xpath: &str) -> Status<f64> {
        parse_number(self.document(handle)?.text(xpath)?)
    }

    fn get_boolean_element(&self, handle: DocumentHandle, xpath: &str) -> Status<i32> {
        parse_boolean(self.document(handle)?.text(xpath)?)
    }

    fn get_integer_element(&self, handle: DocumentHandle, xpath: &str) -> Status<i32> {
        parse_number(self.document(handle)?.text(xpath)?)
    }

    fn add_text_attribute(
        &mut self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
        value: &str,
    ) -> Status {
        self.document_mut(handle)?
            .set_attribute(xpath, attribute, value.to_string())
    }

    fn add_double_attribute(
        &mut self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
        value: f64,
    ) -> Status {
        self.document_mut(handle)?
            .set_attribute(xpath, attribute, value.to_string())
    }

    fn add_integer_attribute(
        &mut self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
        value: i32,
    ) -> Status {
        self.document_mut(handle)?
            .set_attribute(xpath, attribute, value.to_string())
    }

    fn remove_element(&mut self, handle: DocumentHandle, xpath: &str) -> Status {
        let document = self.document_mut(handle)?;
        let id = document.resolve(xpath)?;
        if document.tree.detach(id) {
            Ok(())
        } else {
            debug!("Refusing to remove the root element of document {}", handle);
            Err(ReturnCode::Failed)
        }
    }

    fn add_text_element(
        &mut self,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
        value: &str,
    ) -> Status {
        self.document_mut(handle)?
            .append_element(parent_xpath, element, value.to_string())
    }

    fn add_double_element(
        &mut self,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
        value: f64,
    ) -> Status {
        self.document_mut(handle)?
            .append_element(parent_xpath, element, value.to_string())
    }

    fn add_boolean_element(
        &mut self,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
        value: i32,
    ) -> Status {
        let text = if value != 0 { "true" } else { "false" };
        self.document_mut(handle)?
            .append_element(parent_xpath, element, text.to_string())
    }

    fn add_integer_element(
        &mut self,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
        value: i32,
    ) -> Status {
        self.document_mut(handle)?
            .append_element(parent_xpath, element, value.to_string())
    }
}
