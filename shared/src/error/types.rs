//! Error types

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error surface handed to callers outside the ledger crate:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (offending ids, item names)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::with_message(ErrorCode::ProductNotFound, "Menu item not found: Soup")
            .with_detail("item", "Soup")
            .with_detail("table_id", 3);

        assert_eq!(err.to_string(), "Menu item not found: Soup");
        let details = err.details.unwrap();
        assert_eq!(details.get("item").unwrap(), "Soup");
        assert_eq!(details.get("table_id").unwrap(), 3);
    }

    #[test]
    fn test_app_error_without_details() {
        let err = AppError::with_message(ErrorCode::ConfigError, "split capacity must be positive");
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.details.is_none());
    }
}
