// Public modules
pub mod error;
pub mod migrate;

pub use error::{Error, ErrorCode, Result};
