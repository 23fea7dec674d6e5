//! Responses for requests that match no handler.

use crate::error::ApiError;

/// Any path without a route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// A known path requested with a method it does not accept.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
