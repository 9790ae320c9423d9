//! Unified error handling
//!
//! - [`ErrorCode`]: stable numeric error codes with HTTP status mapping
//! - [`AppError`]: the application error type carried through every fallible path
//! - [`ApiResponse`]: the JSON envelope errors render as at the HTTP boundary

pub mod codes;
pub mod types;

pub use codes::{ErrorCategory, ErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
