//! Data types for the Team Poll server
//!
//! This module contains all the core data structures used throughout the application.

mod activity;
mod error;
mod request;

pub use activity::Activity;
pub use error::StoreError;
pub use request::{AddActivityRequest, CastVoteRequest, ToggleVoteRequest};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
