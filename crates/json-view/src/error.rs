use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::json;

/// Error type for rendering a view model.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The selected payload has no JSON representation.
    #[error("JSON encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ViewError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ViewError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::Encoding(_) => "ENCODING_ERROR",
        }
    }
}

/// Error envelope written when a view cannot be rendered.
///
/// ```json
/// {
///   "success": false,
///   "error": { "code": "ENCODING_ERROR", "message": "..." }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl From<&ViewError> for ErrorBody {
    fn from(err: &ViewError) -> Self {
        ErrorBody {
            success: false,
            error: ErrorDetail {
                code: err.error_code().to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match json::to_string(&ErrorBody::from(&self)) {
            Ok(body) => (
                status,
                [(header::CONTENT_TYPE, json::CONTENT_TYPE_JSON)],
                body,
            )
                .into_response(),
            Err(_) => (status, "Internal Server Error").into_response(),
        }
    }
}
