//! Origin allow-list gate.

use axum::extract::FromRequestParts;
use axum::http::header::ORIGIN;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// Passes requests that carry no `Origin` header or one that exactly matches
/// an entry of [`ServerConfig::cors_origins`](crate::config::ServerConfig).
///
/// Mounted router-wide with `axum::middleware::from_extractor_with_state`,
/// so it runs ahead of every route, the fallback included. Handlers never
/// need to take it as a parameter.
#[derive(Debug, Clone, Copy)]
pub struct OriginGate;

impl FromRequestParts<AppState> for OriginGate {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(ORIGIN) else {
            return Ok(OriginGate);
        };

        match value.to_str() {
            Ok(origin) if state.config.is_origin_allowed(origin) => Ok(OriginGate),
            Ok(origin) => {
                tracing::warn!(origin, method = %parts.method, uri = %parts.uri, "Rejected disallowed origin");
                Err(AppError::OriginRejected(origin.to_string()))
            }
            Err(_) => {
                tracing::warn!(method = %parts.method, uri = %parts.uri, "Rejected non-UTF-8 origin");
                Err(AppError::OriginRejected("<non-utf8>".to_string()))
            }
        }
    }
}
