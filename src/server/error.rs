//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for the lookup error taxonomy so route
//! handlers can return `Result<T, AppError>` directly. The status for each
//! error kind comes from the single table in [`LookupError::http_status`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::LookupError;

/// Wrapper so `IntoResponse` can be implemented for the library error type
pub struct AppError(LookupError);

impl From<LookupError> for AppError {
    fn from(error: LookupError) -> Self {
        Self(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            log::error!("Lookup failed ({}): {}", self.0.code(), self.0);
        }

        let body = json!({
            "success": false,
            "error": self.0.code(),
            "detail": self.0.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
