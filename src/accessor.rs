//! A document-bound view over the accessor functions.

use crate::config::AccessorConfig;
use crate::error::TixiError;
use crate::helper;
use crate::value::TixiValue;
use chrono::{DateTime, Utc};
use tixi_traits::{DocumentHandle, TixiBackend};

/// Binds a backend, one document handle and an [`AccessorConfig`].
///
/// Every method delegates to the free function of the same name in
/// [`helper`], using the configured time format where one applies.
///
/// # Example
///
/// ```ignore
/// let mut tixi = InMemoryTixi::new();
/// let handle = tixi.open_document("aircraft.xml")?;
/// let mut doc = DocumentAccessor::open(&mut tixi, handle, AccessorConfig::default())?;
/// if !doc.check_attribute("/cpacs/header", "version")? {
///     doc.save_attribute("/cpacs/header", "version", "3.4")?;
/// }
/// ```
pub struct DocumentAccessor<'a, B: TixiBackend + ?Sized> {
    backend: &'a mut B,
    handle: DocumentHandle,
    config: AccessorConfig,
}

impl<'a, B: TixiBackend + ?Sized> DocumentAccessor<'a, B> {
    /// Creates the accessor without touching the document.
    pub fn new(backend: &'a mut B, handle: DocumentHandle, config: AccessorConfig) -> Self {
        Self {
            backend,
            handle,
            config,
        }
    }

    /// Creates the accessor and registers namespaces if the config asks for it.
    pub fn open(
        backend: &'a mut B,
        handle: DocumentHandle,
        config: AccessorConfig,
    ) -> Result<Self, TixiError> {
        let mut accessor = Self::new(backend, handle, config);
        if accessor.config.register_namespaces {
            accessor.register_namespaces()?;
        }
        Ok(accessor)
    }

    pub fn handle(&self) -> DocumentHandle {
        self.handle
    }

    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &*self.backend
    }

    pub fn register_namespaces(&mut self) -> Result<(), TixiError> {
        helper::register_namespaces(&mut *self.backend, self.handle)
    }

    pub fn check_element(&self, xpath: &str) -> Result<bool, TixiError> {
        helper::check_element(self.backend(), self.handle, xpath)
    }

    pub fn check_attribute(&self, xpath: &str, attribute: &str) -> Result<bool, TixiError> {
        helper::check_attribute(self.backend(), self.handle, xpath, attribute)
    }

    pub fn get_named_children_count(&self, xpath: &str) -> Result<i32, TixiError> {
        helper::get_named_children_count(self.backend(), self.handle, xpath)
    }

    pub fn get_text_attribute(&self, xpath: &str, attribute: &str) -> Result<String, TixiError> {
        helper::get_text_attribute(self.backend(), self.handle, xpath, attribute)
    }

    pub fn get_double_attribute(&self, xpath: &str, attribute: &str) -> Result<f64, TixiError> {
        helper::get_double_attribute(self.backend(), self.handle, xpath, attribute)
    }

    pub fn get_bool_attribute(&self, xpath: &str, attribute: &str) -> Result<bool, TixiError> {
        helper::get_bool_attribute(self.backend(), self.handle, xpath, attribute)
    }

    pub fn get_int_attribute(&self, xpath: &str, attribute: &str) -> Result<i32, TixiError> {
        helper::get_int_attribute(self.backend(), self.handle, xpath, attribute)
    }

    pub fn get_text_element(&self, xpath: &str) -> Result<String, TixiError> {
        helper::get_text_element(self.backend(), self.handle, xpath)
    }

    pub fn get_double_element(&self, xpath: &str) -> Result<f64, TixiError> {
        helper::get_double_element(self.backend(), self.handle, xpath)
    }

    pub fn get_bool_element(&self, xpath: &str) -> Result<bool, TixiError> {
        helper::get_bool_element(self.backend(), self.handle, xpath)
    }

    pub fn get_int_element(&self, xpath: &str) -> Result<i32, TixiError> {
        helper::get_int_element(self.backend(), self.handle, xpath)
    }

    pub fn get_time_element(&self, xpath: &str) -> Result<DateTime<Utc>, TixiError> {
        helper::get_time_element(self.backend(), self.handle, xpath, &self.config.time_format)
    }

    pub fn save_attribute<V: TixiValue>(
        &mut self,
        xpath: &str,
        attribute: &str,
        value: V,
    ) -> Result<(), TixiError> {
        helper::save_attribute(&mut *self.backend, self.handle, xpath, attribute, value)
    }

    pub fn save_element<V: TixiValue>(&mut self, xpath: &str, value: V) -> Result<(), TixiError> {
        helper::save_element(&mut *self.backend, self.handle, xpath, value)
    }

    pub fn save_time_element(
        &mut self,
        xpath: &str,
        value: &DateTime<Utc>,
    ) -> Result<(), TixiError> {
        helper::save_time_element(
            &mut *self.backend,
            self.handle,
            xpath,
            value,
            &self.config.time_format,
        )
    }
}
