//! WebSocket module for real-time vote updates
//!
//! Provides the WebSocket endpoint at `/ws` for broadcasting poll changes to
//! connected clients.
//!
//! ## Features
//! - Snapshot-then-subscribe: every connection starts with the full list
//! - Explicit subscriber registry with best-effort per-subscriber delivery
//! - Sequence ID tracking for gap detection

pub mod events;
pub mod handler;
pub mod hub;
pub mod state;

// Re-export commonly used items
pub use events::{ClientMessage, PollEvent, WsMessage};
pub use hub::{BroadcastHub, SubscriberId};
pub use state::AppState;
