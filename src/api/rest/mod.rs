//! REST API module for HTTP endpoints
//!
//! Provides the mutation surface and recovery reads:
//! - `GET  /api/activities` - Full activity snapshot
//! - `POST /api/activities` - Add an activity
//! - `POST /api/vote` - Single-choice vote
//! - `POST /api/toggle` - Multi-choice vote toggle
//! - `GET  /api/votes/:client_id` - A client's current votes
//! - `DELETE /api/activities/:id` - Remove an activity

pub mod activities;
pub mod votes;

use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Current sequence ID for cache invalidation
    pub sequence_id: u64,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, sequence_id: u64) -> Self {
        Self { data, sequence_id }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }
}
