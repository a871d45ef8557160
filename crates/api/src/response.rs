//! Shared response body types for API handlers.

use serde::Serialize;

/// A `{ "message": ... }` confirmation body.
///
/// # Example
///
/// ```ignore
/// Ok(Json(MessageResponse::new("Movie deleted")))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
