//! Unified error system for the café ledger
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::TableNotFound, "Table not found: 7")
//!     .with_detail("table_id", 7);
//! assert_eq!(err.code.to_string(), "E7001");
//! assert_eq!(err.details.unwrap().get("table_id").unwrap(), 7);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
