//! Values that can be written as attributes or elements.

use tixi_traits::{DocumentHandle, Status, TixiBackend};

/// A value with a backend write call for attributes and for elements.
///
/// Implemented for text (`&str`, `String`), `f64`, `i32` and `bool`.
/// Booleans go through the integer attribute call, since the backend has no
/// boolean attribute writer.
pub trait TixiValue {
    fn add_attribute<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status;

    fn add_element<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
    ) -> Status;
}

impl TixiValue for &str {
    fn add_attribute<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status {
        backend.add_text_attribute(handle, xpath, attribute, self)
    }

    fn add_element<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
    ) -> Status {
        backend.add_text_element(handle, parent_xpath, element, self)
    }
}

impl TixiValue for &String {
    fn add_attribute<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status {
        self.as_str().add_attribute(backend, handle, xpath, attribute)
    }

    fn add_element<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
    ) -> Status {
        self.as_str().add_element(backend, handle, parent_xpath, element)
    }
}

impl TixiValue for String {
    fn add_attribute<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status {
        self.as_str().add_attribute(backend, handle, xpath, attribute)
    }

    fn add_element<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
    ) -> Status {
        self.as_str().add_element(backend, handle, parent_xpath, element)
    }
}

impl TixiValue for f64 {
    fn add_attribute<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status {
        backend.add_double_attribute(handle, xpath, attribute, self)
    }

    fn add_element<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
    ) -> Status {
        backend.add_double_element(handle, parent_xpath, element, self)
    }
}

impl TixiValue for i32 {
    fn add_attribute<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status {
        backend.add_integer_attribute(handle, xpath, attribute, self)
    }

    fn add_element<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
    ) -> Status {
        backend.add_integer_element(handle, parent_xpath, element, self)
    }
}

impl TixiValue for bool {
    fn add_attribute<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        xpath: &str,
        attribute: &str,
    ) -> Status {
        backend.add_integer_attribute(handle, xpath, attribute, i32::from(self))
    }

    fn add_element<B: TixiBackend + ?Sized>(
        self,
        backend: &mut B,
        handle: DocumentHandle,
        parent_xpath: &str,
        element: &str,
    ) -> Status {
        backend.add_boolean_element(handle, parent_xpath, element, i32::from(self))
    }
}
