use crate::FetchError;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use std::any::Any;

/// Body of every failed response: `{"success": false, "error": "..."}`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Failure of a request handler
///
/// Each variant maps to one HTTP status; see [`ApiError::status_code`].
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed request fields (400)
    Validation(String),
    /// The request body could not be read (status chosen by axum, e.g. 413)
    BodyRejected(BytesRejection),
    /// Retrieving the remote document failed (500, message passed through)
    Fetch(FetchError),
    /// No route matched (404)
    NotFound,
    /// The route exists but not for this method (405)
    MethodNotAllowed,
    /// A handler panicked (500, generic message)
    Unhandled,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::BodyRejected(rejection) => rejection.status(),
            ApiError::Fetch(_) | ApiError::Unhandled => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::BodyRejected(rejection) => rejection.body_text(),
            ApiError::Fetch(e) => format!("Server error: {}", e),
            ApiError::NotFound => "Endpoint not found".to_string(),
            ApiError::MethodNotAllowed => "Method not allowed".to_string(),
            ApiError::Unhandled => "Internal server error".to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error: self.message(),
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        ApiError::Fetch(error)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BodyRejected(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_response();

        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status.as_u16(), body.error);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), body.error);
        }

        (status, Json(body)).into_response()
    }
}

/// Converts a handler panic into the generic 500 response
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", detail);

    ApiError::Unhandled.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let error = ApiError::Validation("No URL provided in request".to_string());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error.to_response(),
            ErrorResponse {
                success: false,
                error: "No URL provided in request".to_string()
            }
        );
    }

    #[test]
    fn test_fetch_error_passes_message_through() {
        let error = ApiError::from(FetchError::Status {
            url: "https://example.com/a.txt".to_string(),
            status: 404,
        });
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.message(),
            "Server error: Failed to fetch https://example.com/a.txt: HTTP status 404"
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.message(), "Endpoint not found");
    }

    #[test]
    fn test_method_not_allowed_message() {
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(ApiError::MethodNotAllowed.message(), "Method not allowed");
    }

    #[tokio::test]
    async fn test_handle_panic_response() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": "Internal server error"})
        );
    }
}
