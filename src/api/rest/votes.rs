//! Vote endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::ApiError;
use crate::api::websocket::events::PollEvent;
use crate::api::websocket::state::AppState;
use crate::types::{CastVoteRequest, ToggleVoteRequest};

/// POST /api/vote - Single-choice vote
///
/// Answers with the full snapshot (a cast can change two activities at once)
/// and broadcasts the same snapshot to every subscriber.
pub async fn cast_vote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CastVoteRequest>,
) -> impl IntoResponse {
    match state.store.cast_vote(
        &req.client_id,
        &req.activity_id,
        req.previous_activity_id.as_deref(),
    ) {
        Ok(snapshot) => {
            tracing::info!(client_id = %req.client_id, activity_id = %req.activity_id, "vote cast");
            state.broadcast_snapshot();
            (StatusCode::OK, Json(snapshot)).into_response()
        }
        Err(err) => {
            let error = ApiError::not_found(err.to_string());
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// POST /api/toggle - Multi-choice vote toggle
pub async fn toggle_vote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleVoteRequest>,
) -> impl IntoResponse {
    match state
        .store
        .toggle_vote(&req.client_id, &req.activity_id, req.selected)
    {
        Ok(activity) => {
            tracing::info!(
                client_id = %req.client_id,
                activity_id = %req.activity_id,
                selected = req.selected,
                "vote toggled"
            );
            state.broadcast(PollEvent::Updated {
                payload: activity.clone(),
            });
            (StatusCode::OK, Json(activity)).into_response()
        }
        Err(err) => {
            let error = ApiError::not_found(err.to_string());
            (StatusCode::NOT_FOUND, Json(error)).into_response()
        }
    }
}

/// GET /api/votes/:client_id - Activity ids this client has voted for
///
/// Lets a client restore its "is this mine" highlighting after a restart
/// without replaying its own history.
pub async fn my_votes(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> impl IntoResponse {
    Json(state.store.votes_of(&client_id))
}
