//! Opaque document handle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a document owned by a backend.
///
/// The handle is a plain copyable token. Whoever opened the document is
/// responsible for closing it; accessors only pass the handle through.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentHandle(i32);

impl DocumentHandle {
    /// Wraps a raw handle value as returned by a backend.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for DocumentHandle {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
