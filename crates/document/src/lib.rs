//! In-memory TIXI document store.
//!
//! This crate provides [`InMemoryTixi`], an implementation of the
//! `TixiBackend` trait from tixi-traits that holds documents in process
//! memory. It lets the accessor layer run without a native TIXI library.
//!
//! ## Modules
//!
//! - `tree`: arena-backed element tree
//! - `path`: parsing and resolving slash-separated element paths
//! - `io`: parsing (roxmltree) and serialization (quick-xml)
//!
//! Tree and path internals stay private; callers reach documents only
//! through handles.

mod error;
mod io;
mod path;
mod store;
mod tree;

pub use store::InMemoryTixi;
pub use tixi_traits::{Status, TixiBackend};
pub use tixi_types::{DocumentHandle, ReturnCode};
