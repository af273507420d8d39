//! TixiBackend trait for abstracting the status-code document API.
//!
//! This trait mirrors the C-style calls of a TIXI document library: each call
//! takes a document handle plus path arguments and reports a [`ReturnCode`].
//! The accessor layer is written exclusively against this trait, so it can
//! run over a native binding or the in-memory document store alike.

use tixi_types::{DocumentHandle, ReturnCode};

/// Result of a single backend call.
///
/// The error side is never [`ReturnCode::Success`].
pub type Status<T = ()> = Result<T, ReturnCode>;

/// A status-code based XML document API.
///
/// Paths are XPath-like, slash-separated element locations. Calls that create
/// or count elements take the parent path and the child name separately.
///
/// # Implementations
///
/// - `InMemoryTixi` (tixi-document): documents held in process memory
///
/// # Example
///
/// ```ignore
/// let mut tixi = InMemoryTixi::new();
/// let handle = tixi.open_document_from_str("<a><b>1</b></a>")?;
/// assert_eq!(tixi.get_integer_element(handle, "/a/b"), Ok(1));
/// ```
pub trait TixiBackend {
    /// Registers the namespace prefixes declared in the document so that
    /// qualified names can be used in paths.
    fn register_namespaces_from_document(&mut self, handle: DocumentHandle) -> Status;

    /// Succeeds if at least one element matches `xpath`.
    ///
    /// Fails with [`ReturnCode::ElementNotFound`] when nothing matches.
    fn check_element(&self, handle: DocumentHandle, xpath: &str) -> Status;

    /// Succeeds if the element at `xpath` carries `attribute`.
    ///
    /// Fails with [`ReturnCode::AttributeNotFound`] when the attribute is missing.
    fn check_attribute(&self, handle: DocumentHandle, xpath: &str, attribute: &str) -> Status;

    /// Counts the children of `parent_xpath` named `child_name`.
    fn get_named_children_count(
        &self,
        handle: DocumentHandle,
        parent_xpath: &str,
        child_name: &str,
    ) -> Status<i32>;

    fn get_text_attribute(
        &self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status<String>;

    fn get_double_attribute(
        &self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status<f64>;

    /// Reads a boolean attribute as an integer flag (non-zero is true).
    fn get_boolean_attribute(
        &self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status<i32>;

    fn get_integer_attribute(
        &self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status<i32>;

    fn get_text_element(&self, handle: DocumentHandle, xpath: &str) -> Status<String>;

    fn get_double_element(&self, handle: DocumentHandle, xpath: &str) -> Status<f64>;

    /// Reads a boolean element as an integer flag (non-zero is true).
    fn get_boolean_element(&self, handle: DocumentHandle, xpath: &str) -> Status<i32>;

    fn get_integer_element(&self, handle: DocumentHandle, xpath: &str) -> Status<i32>;

    /// Sets `attribute` on the element at `xpath`, overwriting any previous value.
    fn add_text_attribute(
        &mut self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
        value: &str,
    ) -> Status;

    fn add_double_attribute(
        &mut self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
        value: f64,
    ) -> Status;

    fn add_integer_attribute(
        &mut self,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
        value: i32,
    ) -> Status;

    /// Removes the element at `xpath` together with its subtree.
    fn remove_element(&mut self, handle: DocumentHandle, xpath: &str) -> Status;

    /// Appends a new child `element` under `parent_xpath`.
    fn add_text_element(
        &mut self,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
        value: &str,
    ) -> Status;

    fn add_double_element(
        &mut self,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
        value: f64,
    ) -> Status;

    /// Appends a boolean child element. Any non-zero `value` is written as true.
    fn add_boolean_element(
        &mut self,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
        value: i32,
    ) -> Status;

    fn add_integer_element(
        &mut self,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
        value: i32,
    ) -> Status;
}
