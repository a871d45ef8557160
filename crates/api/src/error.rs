use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use reel_core::error::CoreError;
use reel_core::validation::ValidationFailure;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`]; the body shapes are part of the public API:
///
/// | Variant                  | Status | Body                          |
/// |--------------------------|--------|-------------------------------|
/// | `Core(Validation)`       | 400    | `{ "error": <violations> }`   |
/// | `Core(NotFound)`         | 404    | `{ "message": "<E> not found" }` |
/// | `LookupMiss`             | 404    | `{ "msg": "<E> not found" }`  |
/// | `BadRequest`             | 400    | `{ "error": <message> }`      |
/// | `OriginRejected`         | 403    | `{ "error": "Origin not allowed" }` |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reel_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A miss on the single-record read route, which reports 404 under the
    /// `msg` key instead of `message`.
    #[error("{entity} with id {id} not found")]
    LookupMiss { entity: &'static str, id: String },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request carried an `Origin` outside the allow-list.
    #[error("Origin not allowed: {0}")]
    OriginRejected(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        AppError::Core(CoreError::Validation(failure))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    json!({ "message": format!("{entity} not found") }),
                ),
                CoreError::Validation(failure) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": failure.to_string() }),
                ),
            },

            // --- HTTP-specific errors ---
            AppError::LookupMiss { entity, .. } => (
                StatusCode::NOT_FOUND,
                json!({ "msg": format!("{entity} not found") }),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::OriginRejected(_) => (
                StatusCode::FORBIDDEN,
                json!({ "error": "Origin not allowed" }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
