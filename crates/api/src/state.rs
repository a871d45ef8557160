use std::sync::Arc;

use reel_store::MovieStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The movie collection. Owned here rather than held in a global so each
    /// test can build its own.
    pub store: Arc<MovieStore>,
    /// Server configuration (read by the origin gate).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: MovieStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
