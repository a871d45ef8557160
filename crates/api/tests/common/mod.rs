#![allow(dead_code)]

use std::net::{IpAddr, Ipv4Addr};

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use reel_api::config::ServerConfig;
use reel_api::router::build_app_router;
use reel_api::state::AppState;
use reel_store::MovieStore;
use serde_json::Value;
use tower::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "http://localhost:8080";

/// Build a test `ServerConfig` with the default origin allow-list and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router over a fresh, empty store.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack (origin gate, CORS, request ID, timeout, tracing, panic
/// recovery). The returned router shares one store across its clones.
pub fn build_test_app() -> Router {
    build_test_app_with(MovieStore::new())
}

/// Same as [`build_test_app`] but over the bundled seed catalogue.
pub fn build_seeded_app() -> Router {
    build_test_app_with(MovieStore::seeded().unwrap())
}

pub fn build_test_app_with(store: MovieStore) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

/// The reference create payload.
pub fn alien() -> Value {
    serde_json::json!({
        "title": "Alien",
        "year": 1979,
        "director": "Ridley Scott",
        "duration": 117,
        "genre": ["Sci-Fi"],
        "rating": 8.5,
        "poster": "http://x/p.jpg"
    })
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Create the reference movie and return its generated id.
pub async fn create_alien(app: &Router) -> String {
    let response = post_json(app, "/movies", alien()).await;
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
