use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

// ============================================================================
// Response bodies
// ============================================================================

/// Body of every error response: a machine-readable code plus optional detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `{"ok": true}` acknowledgment.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Json<Ack> {
        Json(Ack { ok: true })
    }
}

// ============================================================================
// Unified error type for handlers
// ============================================================================

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                code = self.code,
                message = self.message.as_deref().unwrap_or_default(),
                "Request failed"
            );
        }

        let body = ErrorBody {
            error: self.code.to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: Option<String>) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    /// Bare `{"error": "not_found"}`.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", None)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "bad_request", Some(message.into()))
    }

    pub fn too_many_files(limit: usize) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "too_many_files",
            Some(format!("at most {limit} files may be uploaded at once")),
        )
    }

    pub fn unexpected_field(field: &str) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "unexpected_field",
            Some(format!("file parts must use the 'files' field, got '{field}'")),
        )
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "payload_too_large",
            Some(message.into()),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal",
            Some(message.into()),
        )
    }
}
