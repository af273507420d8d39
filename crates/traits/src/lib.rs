pub mod backend;

pub use backend::{Status, TixiBackend};
pub use tixi_types::{DocumentHandle, ReturnCode};
