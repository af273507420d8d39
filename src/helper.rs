//! Typed accessors over a [`TixiBackend`].
//!
//! Every function forwards to one backend call and turns its status into a
//! value or a [`TixiError`] carrying the path context. The existence checks
//! are the only calls where a failure status is not an error: "not found"
//! becomes `false`.

use crate::config::TimeFormat;
use crate::error::TixiError;
use crate::path::{SplitXPath, split_xpath};
use crate::time::{format_time, parse_time};
use crate::value::TixiValue;
use chrono::{DateTime, Utc};
use log::debug;
use tixi_traits::{DocumentHandle, ReturnCode, Status, TixiBackend};

/// Registers the document's namespace prefixes with the backend.
pub fn register_namespaces<B: TixiBackend + ?Sized>(
    backend: &mut B,
    handle: DocumentHandle,
) -> Result<(), TixiError> {
    debug!("Registering namespaces of document {}", handle);
    backend
        .register_namespaces_from_document(handle)
        .map_err(|code| TixiError::with_message(code, "Failed to register document namespaces"))
}

/// Returns whether the element at `xpath` carries `attribute`.
pub fn check_attribute<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
    attribute: &str,
) -> Result<bool, TixiError> {
    match backend.check_attribute(handle, xpath, attribute) {
        Ok(()) => Ok(true),
        Err(ReturnCode::AttributeNotFound) => Ok(false),
        Err(code) => Err(TixiError::with_message(
            code,
            format!("Checking attribute existence failed\nxpath: {xpath}\nattribute: {attribute}"),
        )),
    }
}

/// Returns whether an element exists at `xpath`.
pub fn check_element<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
) -> Result<bool, TixiError> {
    match backend.check_element(handle, xpath) {
        Ok(()) => Ok(true),
        Err(ReturnCode::ElementNotFound) => Ok(false),
        Err(code) => Err(TixiError::with_message(
            code,
            format!("Checking element existence failed\nxpath: {xpath}"),
        )),
    }
}

/// Counts the elements matching the last step of `xpath` under its parent.
pub fn get_named_children_count<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
) -> Result<i32, TixiError> {
    let SplitXPath {
        parent_xpath,
        element,
    } = split_xpath(xpath);
    backend
        .get_named_children_count(handle, &parent_xpath, &element)
        .map_err(|code| {
            TixiError::with_message(code, format!("Error counting named children\nxpath: {xpath}"))
        })
}

fn get_attribute_internal<B, T, F>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
    attribute: &str,
    get: F,
) -> Result<T, TixiError>
where
    B: TixiBackend + ?Sized,
    F: FnOnce(&B, DocumentHandle, &str, &str) -> Status<T>,
{
    get(backend, handle, xpath, attribute).map_err(|code| {
        TixiError::with_message(
            code,
            format!("Error getting attribute value\nxpath: {xpath}\nattribute: {attribute}"),
        )
    })
}

pub fn get_text_attribute<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
    attribute: &str,
) -> Result<String, TixiError> {
    get_attribute_internal(backend, handle, xpath, attribute, B::get_text_attribute)
}

pub fn get_double_attribute<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
    attribute: &str,
) -> Result<f64, TixiError> {
    get_attribute_internal(backend, handle, xpath, attribute, B::get_double_attribute)
}

/// Any non-zero stored flag reads as `true`.
pub fn get_bool_attribute<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
    attribute: &str,
) -> Result<bool, TixiError> {
    get_attribute_internal(backend, handle, xpath, attribute, B::get_boolean_attribute)
        .map(|flag| flag != 0)
}

pub fn get_int_attribute<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
    attribute: &str,
) -> Result<i32, TixiError> {
    get_attribute_internal(backend, handle, xpath, attribute, B::get_integer_attribute)
}

fn get_element_internal<B, T, F>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
    get: F,
) -> Result<T, TixiError>
where
    B: TixiBackend + ?Sized,
    F: FnOnce(&B, DocumentHandle, &str) -> Status<T>,
{
    get(backend, handle, xpath).map_err(|code| {
        TixiError::with_message(code, format!("Error getting element value\nxpath: {xpath}"))
    })
}

pub fn get_text_element<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
) -> Result<String, TixiError> {
    get_element_internal(backend, handle, xpath, B::get_text_element)
}

pub fn get_double_element<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
) -> Result<f64, TixiError> {
    get_element_internal(backend, handle, xpath, B::get_double_element)
}

/// Any non-zero stored flag reads as `true`.
pub fn get_bool_element<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
) -> Result<bool, TixiError> {
    get_element_internal(backend, handle, xpath, B::get_boolean_element).map(|flag| flag != 0)
}

pub fn get_int_element<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
) -> Result<i32, TixiError> {
    get_element_internal(backend, handle, xpath, B::get_integer_element)
}

/// Reads element text as a timestamp in the given format.
///
/// Text that does not parse is an error with code [`ReturnCode::Failed`].
pub fn get_time_element<B: TixiBackend + ?Sized>(
    backend: &B,
    handle: DocumentHandle,
    xpath: &str,
    format: &TimeFormat,
) -> Result<DateTime<Utc>, TixiError> {
    let text = get_text_element(backend, handle, xpath)?;
    parse_time(&text, format).ok_or_else(|| {
        TixiError::with_message(
            ReturnCode::Failed,
            format!("Error converting element text to time\nxpath: {xpath}\nvalue: {text}"),
        )
    })
}

fn save_attribute_internal<B, F>(
    backend: &mut B,
    handle: DocumentHandle,
    xpath: &str,
    attribute: &str,
    save: F,
) -> Result<(), TixiError>
where
    B: TixiBackend + ?Sized,
    F: FnOnce(&mut B, DocumentHandle, &str, &str) -> Status,
{
    backend.check_element(handle, xpath).map_err(|code| {
        TixiError::with_message(
            code,
            format!("Error setting attribute, element does not exist\nxpath: {xpath}"),
        )
    })?;

    save(backend, handle, xpath, attribute).map_err(|code| {
        TixiError::with_message(
            code,
            format!("Error setting attribute\nxpath: {xpath}\nattribute: {attribute}"),
        )
    })
}

/// Sets `attribute` on the existing element at `xpath`.
///
/// Fails without writing anything if the element does not exist.
pub fn save_attribute<B, V>(
    backend: &mut B,
    handle: DocumentHandle,
    xpath: &str,
    attribute: &str,
    value: V,
) -> Result<(), TixiError>
where
    B: TixiBackend + ?Sized,
    V: TixiValue,
{
    save_attribute_internal(backend, handle, xpath, attribute, |backend, handle, xpath, attribute| {
        value.add_attribute(backend, handle, xpath, attribute)
    })
}

fn save_element_internal<B, F>(
    backend: &mut B,
    handle: DocumentHandle,
    xpath: &str,
    save: F,
) -> Result<(), TixiError>
where
    B: TixiBackend + ?Sized,
    F: FnOnce(&mut B, DocumentHandle, &str, &str) -> Status,
{
    let SplitXPath {
        parent_xpath,
        element,
    } = split_xpath(xpath);

    // The leaf must name the element to create, not select among siblings.
    if !is_plain_element_step(&element) {
        return Err(TixiError::with_message(
            ReturnCode::InvalidXpath,
            format!("Error saving element, last path step is not an element name
xpath: {xpath}"),
        ));
    }

    backend.check_element(handle, &parent_xpath).map_err(|code| {
        TixiError::with_message(
            code,
            format!("Error saving element, parent element does not exist\nparent xpath: {parent_xpath}"),
        )
    })?;

    if check_element(&*backend, handle, xpath)? {
        debug!("Replacing existing element at '{}'", xpath);
        backend.remove_element(handle, xpath).map_err(|code| {
            TixiError::with_message(
                code,
                format!("Error saving element, failed to remove previous element\nxpath: {xpath}"),
            )
        })?;
    }

    save(backend, handle, &parent_xpath, &element).map_err(|code| {
        TixiError::with_message(code, format!("Error saving element\nxpath: {xpath}"))
    })
}

fn is_plain_element_step(step: &str) -> bool {
    !step.contains(['[', '*'])
}

/// Creates the element at `xpath` with `value`, replacing an existing one.
///
/// The parent element must already exist.
pub fn save_element<B, V>(
    backend: &mut B,
    handle: DocumentHandle,
    xpath: &str,
    value: V,
) -> Result<(), TixiError>
where
    B: TixiBackend + ?Sized,
    V: TixiValue,
{
    save_element_internal(backend, handle, xpath, |backend, handle, parent_xpath, element| {
        value.add_element(backend, handle, parent_xpath, element)
    })
}

/// Saves a timestamp as element text in the given format.
pub fn save_time_element<B: TixiBackend + ?Sized>(
    backend: &mut B,
    handle: DocumentHandle,
    xpath: &str,
    value: &DateTime<Utc>,
    format: &TimeFormat,
) -> Result<(), TixiError> {
    let text = format_time(value, format).map_err(|_| {
        TixiError::with_message(
            ReturnCode::Failed,
            format!("Error formatting time\nxpath: {xpath}\nformat: {format:?}"),
        )
    })?;
    save_element(backend, handle, xpath, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Backend that answers every call with a fixed status and records the
    /// calls it receives.
    #[derive(Default)]
    struct ScriptedBackend {
        check_element: Option<ReturnCode>,
        check_attribute: Option<ReturnCode>,
        read: Option<ReturnCode>,
        stored_flag: i32,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedBackend {
        fn status(&self, call: String, code: Option<ReturnCode>) -> Status {
            self.calls.borrow_mut().push(call);
            code.map_or(Ok(()), Err)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl TixiBackend for ScriptedBackend {
        fn register_namespaces_from_document(&mut self, _: DocumentHandle) -> Status {
            self.status("register".into(), self.read)
        }
        fn check_element(&self, _: DocumentHandle, xpath: &str) -> Status {
            self.status(format!("check_element {xpath}"), self.check_element)
        }
        fn check_attribute(&self, _: DocumentHandle, xpath: &str, attribute: &str) -> Status {
            self.status(format!("check_attribute {xpath} {attribute}"), self.check_attribute)
        }
        fn get_named_children_count(&self, _: DocumentHandle, parent: &str, name: &str) -> Status<i32> {
            self.status(format!("count {parent} {name}"), self.read).map(|_| 2)
        }
        fn get_text_attribute(&self, _: DocumentHandle, _: &str, _: &str) -> Status<String> {
            self.status("get_text_attribute".into(), self.read).map(|_| "text".into())
        }
        fn get_double_attribute(&self, _: DocumentHandle, _: &str, _: &str) -> Status<f64> {
            self.status("get_double_attribute".into(), self.read).map(|_| 1.5)
        }
        fn get_boolean_attribute(&self, _: DocumentHandle, _: &str, _: &str) -> Status<i32> {
            self.status("get_boolean_attribute".into(), self.read).map(|_| self.stored_flag)
        }
        fn get_integer_attribute(&self, _: DocumentHandle, _: &str, _: &str) -> Status<i32> {
            self.status("get_integer_attribute".into(), self.read).map(|_| 7)
        }
        fn get_text_element(&self, _: DocumentHandle, _: &str) -> Status<String> {
            self.status("get_text_element".into(), self.read).map(|_| "text".into())
        }
        fn get_double_element(&self, _: DocumentHandle, _: &str) -> Status<f64> {
            self.status("get_double_element".into(), self.read).map(|_| 2.5)
        }
        fn get_boolean_element(&self, _: DocumentHandle, _: &str) -> Status<i32> {
            self.status("get_boolean_element".into(), self.read).map(|_| self.stored_flag)
        }
        fn get_integer_element(&self, _: DocumentHandle, _: &str) -> Status<i32> {
            self.status("get_integer_element".into(), self.read).map(|_| 9)
        }
        fn add_text_attribute(&mut self, _: DocumentHandle, _: &str, a: &str, v: &str) -> Status {
            self.status(format!("add_text_attribute {a}={v}"), None)
        }
        fn add_double_attribute(&mut self, _: DocumentHandle, _: &str, a: &str, v: f64) -> Status {
            self.status(format!("add_double_attribute {a}={v}"), None)
        }
        fn add_integer_attribute(&mut self, _: DocumentHandle, _: &str, a: &str, v: i32) -> Status {
            self.status(format!("add_integer_attribute {a}={v}"), None)
        }
        fn remove_element(&mut self, _: DocumentHandle, xpath: &str) -> Status {
            self.status(format!("remove {xpath}"), None)
        }
        fn add_text_element(&mut self, _: DocumentHandle, p: &str, e: &str, v: &str) -> Status {
            self.status(format!("add_text_element {p} {e}={v}"), None)
        }
        fn add_double_element(&mut self, _: DocumentHandle, p: &str, e: &str, v: f64) -> Status {
            self.status(format!("add_double_element {p} {e}={v}"), None)
        }
        fn add_boolean_element(&mut self, _: DocumentHandle, p: &str, e: &str, v: i32) -> Status {
            self.status(format!("add_boolean_element {p} {e}={v}"), None)
        }
        fn add_integer_element(&mut self, _: DocumentHandle, p: &str, e: &str, v: i32) -> Status {
            self.status(format!("add_integer_element {p} {e}={v}"), None)
        }
    }

    const H: DocumentHandle = DocumentHandle::new(1);

    #[test]
    fn test_check_attribute_three_way() {
        let mut backend = ScriptedBackend::default();
        assert_eq!(check_attribute(&backend, H, "/a/b", "x"), Ok(true));

        backend.check_attribute = Some(ReturnCode::AttributeNotFound);
        assert_eq!(check_attribute(&backend, H, "/a/b", "x"), Ok(false));

        backend.check_attribute = Some(ReturnCode::ElementNotFound);
        let err = check_attribute(&backend, H, "/a/b", "x").unwrap_err();
        assert_eq!(err.code(), ReturnCode::ElementNotFound);
        assert!(err.message().contains("xpath: /a/b"));
        assert!(err.message().contains("attribute: x"));
    }

    #[test]
    fn test_check_element_three_way() {
        let mut backend = ScriptedBackend::default();
        assert_eq!(check_element(&backend, H, "/a"), Ok(true));

        backend.check_element = Some(ReturnCode::ElementNotFound);
        assert_eq!(check_element(&backend, H, "/a"), Ok(false));

        backend.check_element = Some(ReturnCode::InvalidHandle);
        let err = check_element(&backend, H, "/a").unwrap_err();
        assert_eq!(err.code(), ReturnCode::InvalidHandle);
        assert_eq!(
            err.message(),
            "Checking element existence failed\nxpath: /a\nReturnCode: INVALID_HANDLE"
        );
    }

    #[test]
    fn test_bool_getters_treat_nonzero_as_true() {
        let mut backend = ScriptedBackend {
            stored_flag: -3,
            ..Default::default()
        };
        assert_eq!(get_bool_attribute(&backend, H, "/a", "f"), Ok(true));
        assert_eq!(get_bool_element(&backend, H, "/a"), Ok(true));
        backend.stored_flag = 0;
        assert_eq!(get_bool_attribute(&backend, H, "/a", "f"), Ok(false));
        assert_eq!(get_bool_element(&backend, H, "/a"), Ok(false));
    }

    #[test]
    fn test_int_attribute_uses_integer_call() {
        let backend = ScriptedBackend::default();
        assert_eq!(get_int_attribute(&backend, H, "/a", "n"), Ok(7));
        assert_eq!(backend.calls(), vec!["get_integer_attribute".to_string()]);
    }

    #[test]
    fn test_getter_failure_carries_context() {
        let backend = ScriptedBackend {
            read: Some(ReturnCode::NoNumber),
            ..Default::default()
        };
        let err = get_double_attribute(&backend, H, "/a/b", "x").unwrap_err();
        assert_eq!(err.code(), ReturnCode::NoNumber);
        assert_eq!(
            err.message(),
            "Error getting attribute value\nxpath: /a/b\nattribute: x\nReturnCode: NO_NUMBER"
        );

        let err = get_int_element(&backend, H, "/a/b").unwrap_err();
        assert_eq!(
            err.message(),
            "Error getting element value\nxpath: /a/b\nReturnCode: NO_NUMBER"
        );
    }

    #[test]
    fn test_save_attribute_checks_element_before_writing() {
        let mut backend = ScriptedBackend {
            check_element: Some(ReturnCode::ElementNotFound),
            ..Default::default()
        };
        let err = save_attribute(&mut backend, H, "/a/missing", "x", 42).unwrap_err();
        assert_eq!(err.code(), ReturnCode::ElementNotFound);
        assert_eq!(backend.calls(), vec!["check_element /a/missing".to_string()]);
    }

    #[test]
    fn test_save_bool_attribute_writes_integer() {
        let mut backend = ScriptedBackend::default();
        save_attribute(&mut backend, H, "/a", "on", true).unwrap();
        save_attribute(&mut backend, H, "/a", "off", false).unwrap();
        let calls = backend.calls();
        assert!(calls.contains(&"add_integer_attribute on=1".to_string()));
        assert!(calls.contains(&"add_integer_attribute off=0".to_string()));
    }

    #[test]
    fn test_save_element_replaces_existing() {
        let mut backend = ScriptedBackend::default();
        save_element(&mut backend, H, "/a/b", 3).unwrap();
        assert_eq!(
            backend.calls(),
            vec![
                "check_element /a".to_string(),
                "check_element /a/b".to_string(),
                "remove /a/b".to_string(),
                "add_integer_element /a b=3".to_string(),
            ]
        );
    }

    #[test]
    fn test_save_bool_element_writes_intended_value() {
        let mut backend = ScriptedBackend::default();
        save_element(&mut backend, H, "/a/on", true).unwrap();
        save_element(&mut backend, H, "/a/off", false).unwrap();
        let calls = backend.calls();
        assert!(calls.contains(&"add_boolean_element /a on=1".to_string()));
        assert!(calls.contains(&"add_boolean_element /a off=0".to_string()));
    }

    #[test]
    fn test_save_element_reports_missing_parent() {
        let mut backend = ScriptedBackend {
            check_element: Some(ReturnCode::ElementNotFound),
            ..Default::default()
        };
        let err = save_element(&mut backend, H, "/a/b/c", "v").unwrap_err();
        assert_eq!(
            err.message(),
            "Error saving element, parent element does not exist\nparent xpath: /a/b\nReturnCode: ELEMENT_NOT_FOUND"
        );
    }

    #[test]
    fn test_save_element_rejects_non_element_leaf_before_any_call() {
        for xpath in ["/a/item[2]", "/a/*", "/a/c:*"] {
            let mut backend = ScriptedBackend::default();
            let err = save_element(&mut backend, H, xpath, "v").unwrap_err();
            assert_eq!(err.code(), ReturnCode::InvalidXpath);
            assert!(err.message().contains(&format!("xpath: {xpath}")));
            assert!(backend.calls().is_empty());
        }
    }

    #[test]
    fn test_named_children_count_splits_path() {
        let backend = ScriptedBackend::default();
        assert_eq!(get_named_children_count(&backend, H, "/a/b/item"), Ok(2));
        assert_eq!(backend.calls(), vec!["count /a/b item".to_string()]);
    }

    #[test]
    fn test_register_namespaces_failure() {
        let mut backend = ScriptedBackend {
            read: Some(ReturnCode::InvalidHandle),
            ..Default::default()
        };
        let err = register_namespaces(&mut backend, H).unwrap_err();
        assert_eq!(
            err.message(),
            "Failed to register document namespaces\nReturnCode: INVALID_HANDLE"
        );
    }

    #[test]
    fn test_time_element_rejects_unparsable_text() {
        let backend = ScriptedBackend::default();
        let err = get_time_element(&backend, H, "/a/date", &TimeFormat::Rfc3339).unwrap_err();
        assert_eq!(err.code(), ReturnCode::Failed);
        assert!(err.message().contains("value: text"));
    }
}
