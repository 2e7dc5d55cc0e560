//! Activity endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{ApiError, ApiResponse};
use crate::api::websocket::events::PollEvent;
use crate::api::websocket::state::AppState;
use crate::types::AddActivityRequest;

/// GET /api/activities - Full activity snapshot in insertion order
pub async fn list_activities(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.store.snapshot();
    let sequence_id = state.hub.current_sequence_id();
    Json(ApiResponse::new(snapshot, sequence_id))
}

/// POST /api/activities - Create an activity
pub async fn add_activity(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddActivityRequest>,
) -> impl IntoResponse {
    match state.store.add_activity(req) {
        Ok(activity) => {
            tracing::info!(id = %activity.id, title = %activity.title, "activity added");
            state.broadcast(PollEvent::Added {
                payload: activity.clone(),
            });
            (StatusCode::OK, Json(activity)).into_response()
        }
        Err(err) => {
            let error = ApiError::bad_request(err.to_string());
            (StatusCode::BAD_REQUEST, Json(error)).into_response()
        }
    }
}

/// DELETE /api/activities/:id - Remove an activity (idempotent)
pub async fn remove_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if let Some(removed) = state.store.remove_activity(&id) {
        tracing::info!(id = %removed.id, "activity removed");
        state.broadcast(PollEvent::Removed { payload: removed });
    }
    // Concurrent duplicate deletes are expected; both answer 204
    StatusCode::NO_CONTENT
}
