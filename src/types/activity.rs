//! Activity record type

use serde::{Deserialize, Serialize};

/// A proposed activity participants can vote on
///
/// `votes` is derived state: it always equals the number of live vote
/// relations referencing this activity, and is never set directly by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub votes: u32,
}

impl Activity {
    /// Create a new activity with a fresh id and zero votes
    pub fn new(
        title: String,
        url: String,
        description: Option<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            url,
            description,
            tags,
            votes: 0,
        }
    }
}
