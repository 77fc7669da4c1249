//! Service information endpoint.

use axum::Json;
use serde_json::{json, Value};

use super::{SERVICE_NAME, SERVICE_VERSION};

/// Service status and available endpoints.
pub async fn info() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "description": "Handles WhatsApp messages and routes to AI agent",
        "endpoints": {
            "root": "GET / (Service info)",
            "health": "GET /health (Health check)",
            "whatsapp": "POST /whatsapp (Main WhatsApp endpoint)",
            "adminUsers": "GET /admin/users (Recent users)",
            "adminStats": "GET /admin/stats (Platform statistics)",
        }
    }))
}
