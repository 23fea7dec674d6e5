//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every internal failure. Details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Rejections caused by malformed or invalid caller input.
///
/// The `Display` text is the message sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClientInputError {
    #[error("Content-Type must be application/json")]
    UnsupportedContentType,

    /// The body was not a JSON object, or the object had no `text` key.
    #[error("Missing required field: text")]
    MissingText,

    #[error("Field 'text' must be a string")]
    TextNotAString,
}

impl ClientInputError {
    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientInputError::UnsupportedContentType => "unsupported_content_type",
            ClientInputError::MissingText => "missing_text",
            ClientInputError::TextNotAString => "text_not_a_string",
        }
    }
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request from the client.
    #[error(transparent)]
    BadRequest(#[from] ClientInputError),

    /// No route matches the request path.
    #[error("Endpoint not found")]
    NotFound,

    /// The path exists but does not accept the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Unexpected failure. The detail is for logs only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to the caller.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (self.status(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        for err in [
            ClientInputError::UnsupportedContentType,
            ClientInputError::MissingText,
            ClientInputError::TextNotAString,
        ] {
            let api_err = ApiError::from(err);
            assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(api_err.public_message(), err.to_string());
        }
    }

    #[test]
    fn client_error_messages() {
        assert_eq!(
            ClientInputError::UnsupportedContentType.to_string(),
            "Content-Type must be application/json"
        );
        assert_eq!(
            ClientInputError::MissingText.to_string(),
            "Missing required field: text"
        );
        assert_eq!(
            ClientInputError::TextNotAString.to_string(),
            "Field 'text' must be a string"
        );
    }

    #[test]
    fn internal_detail_is_not_public() {
        let err = ApiError::Internal("disk on fire at /var/lib".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn routing_errors() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.public_message(), "Endpoint not found");
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::MethodNotAllowed.public_message(),
            "Method not allowed"
        );
    }

    #[test]
    fn into_response_sets_status() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
