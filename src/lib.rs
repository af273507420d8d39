//! Typed, `Result`-based accessors over a TIXI-style XML document API.
//!
//! The underlying API reports every outcome as a status code. This crate
//! turns those codes into values or a single [`TixiError`], splits element
//! paths into parent and leaf for the calls that need it, and folds
//! existence checks into `bool` results.
//!
//! ## Example
//!
//! ```ignore
//! use tixi_helper::{InMemoryTixi, check_attribute, get_int_attribute, save_attribute};
//!
//! let mut tixi = InMemoryTixi::new();
//! let handle = tixi.open_document_from_str("<a><b/></a>")?;
//! assert!(!check_attribute(&tixi, handle, "/a/b", "x")?);
//! save_attribute(&mut tixi, handle, "/a/b", "x", 42)?;
//! assert_eq!(get_int_attribute(&tixi, handle, "/a/b", "x")?, 42);
//! ```

pub mod accessor;
pub mod config;
pub mod error;
pub mod helper;
pub mod path;
pub mod time;
pub mod value;

pub use accessor::DocumentAccessor;
pub use config::{AccessorConfig, TimeFormat};
pub use error::{TixiError, error_to_string, raw_error_to_string};
pub use helper::{
    check_attribute, check_element, get_bool_attribute, get_bool_element, get_double_attribute,
    get_double_element, get_int_attribute, get_int_element, get_named_children_count,
    get_text_attribute, get_text_element, get_time_element, register_namespaces, save_attribute,
    save_element, save_time_element,
};
pub use path::{SplitXPath, split_xpath};
pub use value::TixiValue;

pub use tixi_document::InMemoryTixi;
pub use tixi_traits::{Status, TixiBackend};
pub use tixi_types::{DocumentHandle, ReturnCode};
