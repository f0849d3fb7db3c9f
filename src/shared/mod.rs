/// Shared utilities: error types, result alias and input validation
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
