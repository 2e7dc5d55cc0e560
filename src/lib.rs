//! Team Poll - real-time vote synchronization engine
//!
//! A small group of participants propose activities and vote on them; every
//! mutation is fanned out to all connected clients over WebSocket so no one
//! ever refreshes or polls.
//!
//! # Components
//!
//! - `store`: authoritative in-memory vote store with atomic mutations
//! - `api::websocket`: subscriber registry and event fan-out (`/ws`)
//! - `api::rest`: the mutation surface consumed by the UI layer
//! - `client`: connection manager with backoff reconnect and an optimistic
//!   reconciliation view
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use team_poll::api::http::create_router;
//! use team_poll::api::websocket::state::AppState;
//! use team_poll::store::VoteStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(VoteStore::new());
//!     let state = Arc::new(AppState::new(store));
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5228").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root
pub use api::websocket::{AppState, BroadcastHub, PollEvent, WsMessage};
pub use client::{ConnectionManager, PollView};
pub use config::{ServerConfig, VoteMode};
pub use store::VoteStore;
pub use types::{Activity, AddActivityRequest, CastVoteRequest, StoreError, ToggleVoteRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
