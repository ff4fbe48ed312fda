//! HTTP error responses.
//!
//! Every failure leaves the service as a JSON envelope of the form
//! `{"error": {"status": "...", "message": "..."}}`. Mapping catalog error
//! kinds to status codes happens here and nowhere else: validation failures
//! become 400, absence is decided per-route (404), everything else is 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use icd10_catalog::CatalogError;
use serde_json::json;

/// An API error: an HTTP status code plus the JSON error envelope.
#[derive(Debug)]
pub struct ApiError {
    code: StatusCode,
    status: &'static str,
    message: String,
}

impl ApiError {
    /// 400 with status `invalid-argument`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST,
            status: "invalid-argument",
            message: message.into(),
        }
    }

    /// 404 with status `not-found`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::NOT_FOUND,
            status: "not-found",
            message: message.into(),
        }
    }

    /// 404 for a path that names no valid route (e.g. an unknown search
    /// field in the path).
    pub fn invalid_route() -> Self {
        Self::not_found("Invalid route")
    }

    /// 500 with status `internal`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            status: "internal",
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "status": self.status,
                "message": self.message,
            }
        });
        (self.code, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        if err.is_validation() {
            Self::bad_request(err.to_string())
        } else {
            tracing::error!("catalog failure: {err}");
            Self::internal(format!("Something wrong happened! {err}"))
        }
    }
}
