//! Route handlers for the relay service.

pub mod admin;
pub mod health;
pub mod info;
pub mod relay;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Service name reported by the info and health endpoints.
pub const SERVICE_NAME: &str = "WhatsApp Bot Service";
/// Service version reported by the info and health endpoints.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(info::info))
        .route("/health", get(health::health))
        // Channel endpoint
        .route("/whatsapp", post(relay::whatsapp))
        // Dashboard endpoints
        .route("/admin/users", get(admin::users))
        .route("/admin/stats", get(admin::stats))
}

/// CORS policy for GET and POST from the channel origin, or any origin.
pub fn cors(origin: Option<HeaderValue>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    match origin {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}
