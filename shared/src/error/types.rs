//! Error types

use super::codes::ErrorCode;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for Lunchly, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

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

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create a customer not found error
    pub fn customer_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::CustomerNotFound, format!("Customer {id} not found"))
            .with_detail("id", id)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Message safe to show to a visitor
    ///
    /// System errors hide their detail (driver messages, paths) behind the
    /// generic text of their code; the detail only goes to the log.
    pub fn public_message(&self) -> &str {
        if self.is_system() {
            self.code.message()
        } else {
            &self.message
        }
    }

    /// Whether this error is a 5xx system failure
    pub fn is_system(&self) -> bool {
        matches!(self.code.category(), super::category::ErrorCategory::System)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

/// The response carries the error itself in its extensions so the error-page
/// layer can render it; the plain-text body is only seen when no such layer
/// is installed.
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();

        // Log system errors
        if self.is_system() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        let mut response = (status, self.public_message().to_string()).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "firstName")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "firstName");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_customer_not_found() {
        let err = AppError::customer_not_found(42);
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
        assert_eq!(err.message, "Customer 42 not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::database("disk I/O error");
        assert_eq!(format!("{}", err), "disk I/O error");
        assert!(err.is_system());
        assert!(!AppError::validation("x").is_system());
    }

    #[test]
    fn test_into_response_keeps_error_in_extensions() {
        let response = AppError::customer_not_found(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let err = response.extensions().get::<AppError>().unwrap();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }

    #[test]
    fn test_system_error_hides_detail() {
        let err = AppError::database("attempted to acquire a connection on a closed pool");
        assert_eq!(err.public_message(), "Database error");
        assert_eq!(
            AppError::customer_not_found(3).public_message(),
            "Customer 3 not found"
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // the extensions keep the full error
        let kept = response.extensions().get::<AppError>().unwrap();
        assert!(kept.message.contains("closed pool"));
    }
}
