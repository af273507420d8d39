pub mod handle;
pub mod return_code;

pub use handle::DocumentHandle;
pub use return_code::ReturnCode;
