//! Error types for trivia operations.
//!
//! Each variant corresponds to one kind a caller can act on: a missing
//! resource, a mutation that could not be applied, a request that lacks a
//! required scoping parameter, or a failure inside the backing store.

use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for trivia operations.
pub type TriviaResult<T> = Result<T, TriviaError>;

/// Main error type for all trivia operations.
#[derive(Error, Debug)]
pub enum TriviaError {
    /// The requested page, category or question does not exist.
    #[error("Not found: {message}")]
    NotFound { message: String, code: ErrorCode },

    /// A create or delete could not be completed.
    #[error("Unprocessable: {message}")]
    Unprocessable {
        message: String,
        code: ErrorCode,
        details: HashMap<String, String>,
    },

    /// A required scoping parameter was omitted by the caller.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String, code: ErrorCode },

    /// Backing store operation failed.
    #[error("Store error: {message}")]
    Store {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lookup (NF_xxx)
    PageNotFound,
    CategoryNotFound,
    QuestionNotFound,
    NoCategories,

    // Mutation (UNP_xxx)
    MissingField,
    InvalidField,
    DeleteFailed,
    InsertFailed,

    // Request (REQ_xxx)
    MissingScope,
    MissingPreviousQuestions,
    MissingSearchTerm,
    MalformedRequest,

    // Store (STORE_xxx)
    StoreConnectionFailed,
    StoreOperationFailed,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::PageNotFound => "NF_001",
            ErrorCode::CategoryNotFound => "NF_002",
            ErrorCode::QuestionNotFound => "NF_003",
            ErrorCode::NoCategories => "NF_004",
            ErrorCode::MissingField => "UNP_001",
            ErrorCode::InvalidField => "UNP_002",
            ErrorCode::DeleteFailed => "UNP_003",
            ErrorCode::InsertFailed => "UNP_004",
            ErrorCode::MissingScope => "REQ_001",
            ErrorCode::MissingPreviousQuestions => "REQ_002",
            ErrorCode::MissingSearchTerm => "REQ_003",
            ErrorCode::MalformedRequest => "REQ_004",
            ErrorCode::StoreConnectionFailed => "STORE_001",
            ErrorCode::StoreOperationFailed => "STORE_002",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl TriviaError {
    /// Create a not found error with a specific code.
    pub fn not_found(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            code,
        }
    }

    /// Page beyond the last populated page.
    pub fn page_not_found(page: usize) -> Self {
        Self::not_found(ErrorCode::PageNotFound, format!("Page {} has no questions", page))
    }

    /// Unknown category id.
    pub fn category_not_found(id: impl std::fmt::Display) -> Self {
        Self::not_found(
            ErrorCode::CategoryNotFound,
            format!("Category with id '{}' not found", id),
        )
    }

    /// Unknown question id.
    pub fn question_not_found(id: i64) -> Self {
        Self::not_found(
            ErrorCode::QuestionNotFound,
            format!("Question with id '{}' not found", id),
        )
    }

    /// Create an unprocessable error.
    pub fn unprocessable(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Unprocessable {
            message: message.into(),
            code,
            details: HashMap::new(),
        }
    }

    /// Create an unprocessable error naming the offending field.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut details = HashMap::new();
        details.insert("field".to_string(), field.to_string());
        Self::Unprocessable {
            message: message.into(),
            code: ErrorCode::InvalidField,
            details,
        }
    }

    /// Create an unprocessable error for a field that was not supplied.
    pub fn missing_field(field: &str) -> Self {
        let mut details = HashMap::new();
        details.insert("field".to_string(), field.to_string());
        Self::Unprocessable {
            message: format!("Missing required field '{}'", field),
            code: ErrorCode::MissingField,
            details,
        }
    }

    /// Create an invalid request error.
    pub fn invalid_request(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            code,
        }
    }

    /// Create a store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            code: ErrorCode::StoreOperationFailed,
            source: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound { code, .. } => *code,
            Self::Unprocessable { code, .. } => *code,
            Self::InvalidRequest { code, .. } => *code,
            Self::Store { code, .. } => *code,
            _ => ErrorCode::Internal,
        }
    }

    /// Whether this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this is an unprocessable error.
    pub fn is_unprocessable(&self) -> bool {
        matches!(self, Self::Unprocessable { .. })
    }

    /// Whether this is an invalid request error.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }
}

impl From<rusqlite::Error> for TriviaError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Store {
            message: err.to_string(),
            code: ErrorCode::StoreOperationFailed,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_error() {
        let err = TriviaError::missing_field("answer");
        assert_eq!(err.code(), ErrorCode::MissingField);
        assert!(err.is_unprocessable());
        assert!(err.to_string().contains("answer"));
    }

    #[test]
    fn test_not_found_error() {
        let err = TriviaError::category_not_found(42);
        assert_eq!(err.code(), ErrorCode::CategoryNotFound);
        assert!(err.is_not_found());
        assert!(!err.is_invalid_request());
    }

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::PageNotFound.as_str(), "NF_001");
        assert_eq!(ErrorCode::MissingScope.as_str(), "REQ_001");
        assert_eq!(ErrorCode::MalformedRequest.as_str(), "REQ_004");
        assert_eq!(ErrorCode::StoreOperationFailed.as_str(), "STORE_002");
    }

    #[test]
    fn test_sqlite_error_becomes_store_error() {
        let err: TriviaError = rusqlite::Error::QueryReturnedNoRows.into();
        assert_eq!(err.code(), ErrorCode::StoreOperationFailed);
    }
}
