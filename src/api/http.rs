//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{activities, votes};
use super::websocket::{handler::ws_handler, state::AppState};

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(ws_handler))
        // Health checks
        .route("/health", get(health_check))
        .route("/api/health", get(api_health))
        // REST API endpoints
        .route(
            "/api/activities",
            get(activities::list_activities).post(activities::add_activity),
        )
        .route("/api/activities/:id", delete(activities::remove_activity))
        .route("/api/vote", post(votes::cast_vote))
        .route("/api/toggle", post(votes::toggle_vote))
        .route("/api/votes/:client_id", get(votes::my_votes))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// JSON health check, kept for clients of the original API
async fn api_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}
