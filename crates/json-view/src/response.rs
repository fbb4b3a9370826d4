use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::json;
use crate::model::JsonModel;

/// Render the model as the complete response body.
///
/// JSONP bodies are sent as `application/javascript`, plain ones as
/// `application/json`. Encoding failures become a 500 error envelope.
impl IntoResponse for JsonModel {
    fn into_response(self) -> Response {
        let content_type = if self.is_jsonp() {
            json::CONTENT_TYPE_JAVASCRIPT
        } else {
            json::CONTENT_TYPE_JSON
        };
        match self.serialize() {
            Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render json view model");
                err.into_response()
            }
        }
    }
}
