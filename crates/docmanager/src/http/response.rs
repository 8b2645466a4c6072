//! Error responses for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

use crate::error::Error;

/// Body message for any lookup of a missing document.
pub const NOT_FOUND_MESSAGE: &str = "Document not found";

/// Body message for store faults.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// An error rendered as `{"error": "<message>"}` with a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    /// A 400 response with the given message.
    #[must_use]
    pub fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    /// The 404 response for a missing document.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: NOT_FOUND_MESSAGE,
        }
    }

    /// The 500 response for a store fault.
    #[must_use]
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_MESSAGE,
        }
    }

    /// Map a crate error to a response.
    ///
    /// Validation failures and malformed bodies become 400 with
    /// `failure_message`; the caller's endpoint decides that wording.
    #[must_use]
    pub fn from_error(err: &Error, failure_message: &'static str) -> Self {
        match err {
            Error::NotFound { .. } => Self::not_found(),
            Error::MissingField { .. } | Error::InvalidDate { .. } => {
                warn!("Rejected request: {err}");
                Self::bad_request(failure_message)
            }
            Error::Json(_) | Error::RequestBody(_) => {
                error!("Malformed request body: {err}");
                Self::bad_request(failure_message)
            }
            _ => {
                error!("Request failed: {err}");
                Self::internal()
            }
        }
    }

    /// The status code of this response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The message placed in the `error` field.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::from_error(&err, INTERNAL_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let api = ApiError::from_error(&Error::not_found("DOC-1"), "unused");
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert_eq!(api.message(), "Document not found");
    }

    #[test]
    fn test_validation_maps_to_400_with_endpoint_message() {
        let err = Error::MissingField { field: "summary" };
        let api = ApiError::from_error(&err, "Summary is required");
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message(), "Summary is required");
    }

    #[test]
    fn test_malformed_json_maps_to_400() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let api = ApiError::from_error(&Error::Json(json_err), "Failed to create document");
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message(), "Failed to create document");
    }

    #[test]
    fn test_unreadable_body_maps_to_400() {
        let err = Error::RequestBody("length limit exceeded".to_string());
        let api = ApiError::from_error(&err, "Failed to update document");
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message(), "Failed to update document");
    }

    #[test]
    fn test_internal_maps_to_500() {
        let api: ApiError = Error::internal("lock poisoned").into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message(), "Internal server error");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
