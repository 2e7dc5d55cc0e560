//! Error taxonomy for store operations

use thiserror::Error;

/// Errors returned by [`VoteStore`](crate::store::VoteStore) mutations
///
/// Both variants are rejected synchronously at the mutation site and never
/// corrupt the rest of the store: a failed request leaves every activity and
/// vote relation untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field on an add request is missing or malformed
    #[error("validation failed: {0}")]
    Validation(String),

    /// A vote or removal referenced an unknown activity id
    #[error("activity not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
