//! Client-side synchronization components
//!
//! - [`ConnectionManager`]: one persistent WebSocket with backoff reconnect
//! - [`PollView`]: last-known activity list with optimistic reconciliation
//! - [`identity`]: stable per-client id persisted across sessions

pub mod backoff;
pub mod connection;
pub mod identity;
pub mod view;

pub use backoff::{next_delay, Backoff, BackoffConfig, ConnectionState};
pub use connection::ConnectionManager;
pub use view::PollView;
