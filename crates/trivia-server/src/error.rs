//! Error handling for the REST API server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use trivia_core::error::TriviaError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            detail: detail.into(),
        }
    }

    // Common error constructors
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", detail)
    }

    pub fn method_not_allowed(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED", detail)
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "UNPROCESSABLE", detail)
    }

    /// Short human-readable message for the status.
    pub fn message(&self) -> &'static str {
        match self.status {
            StatusCode::BAD_REQUEST => "bad request",
            StatusCode::NOT_FOUND => "resource not found",
            StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
            StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
            _ => "internal server error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.detail)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
    pub code: String,
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.status.as_u16(),
            message: self.message().to_string(),
            code: self.code,
            detail: self.detail,
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from trivia-core errors
impl From<TriviaError> for ApiError {
    fn from(err: TriviaError) -> Self {
        let code = err.code().as_str();
        let status = match &err {
            TriviaError::NotFound { .. } => StatusCode::NOT_FOUND,
            TriviaError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            TriviaError::Store { .. }
            | TriviaError::Configuration(_)
            | TriviaError::Io(_)
            | TriviaError::Serialization(_)
            | TriviaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "Request failed");
        }

        ApiError::new(status, code, err.to_string())
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::error::ErrorCode;

    #[test]
    fn test_kind_to_status() {
        let cases = [
            (TriviaError::page_not_found(9), StatusCode::NOT_FOUND),
            (TriviaError::missing_field("answer"), StatusCode::UNPROCESSABLE_ENTITY),
            (
                TriviaError::invalid_request(ErrorCode::MissingScope, "no scope"),
                StatusCode::BAD_REQUEST,
            ),
            (TriviaError::store("gone"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_method_not_allowed_message() {
        let err = ApiError::method_not_allowed("PUT is not supported on /questions");
        assert_eq!(err.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.message(), "method not allowed");
    }

    #[test]
    fn test_code_carried_over() {
        let err = ApiError::from(TriviaError::category_not_found(5));
        assert_eq!(err.code, "NF_002");
        assert_eq!(err.message(), "resource not found");
    }
}
