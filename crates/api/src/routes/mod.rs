pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /health                 service status
/// /movies                 list (?genre=), create
/// /movies/{id}            get, partial update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(movies::router())
}
