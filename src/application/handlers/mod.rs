//! HTTP handlers and the JSON error rendering shared by all of them

pub mod auth_handler;
pub mod health_handler;
pub mod trade_handler;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::errors::{ApiError, FieldError};

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ReadOnly(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEmail(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation(errors) => json!({
                "message": "Validation failed",
                "errors": errors,
            }),
            ApiError::Internal(details) => {
                tracing::error!("Internal error: {}", details);
                json!({ "message": "Internal server error" })
            }
            other => json!({ "message": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Map axum's JSON extractor rejection onto the API error model: unparsable
/// JSON is a malformed body, well-formed JSON of the wrong shape is a
/// validation failure.
pub fn json_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonSyntaxError(_) => ApiError::MalformedBody("Invalid JSON payload".to_string()),
        JsonRejection::JsonDataError(err) => {
            ApiError::Validation(vec![FieldError::new("body", err.body_text())])
        }
        other => ApiError::MalformedBody(other.body_text()),
    }
}
