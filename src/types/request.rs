//! Mutation request payloads
//!
//! Wire field names match the original client (`camelCase`).

use serde::{Deserialize, Serialize};

/// Request to create a new activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddActivityRequest {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AddActivityRequest {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: None,
            tags: Vec::new(),
        }
    }
}

/// Single-choice vote: move this client's vote to `activity_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub client_id: String,
    pub activity_id: String,
    /// The activity the client believes it previously voted for.
    /// A hint only: the store's relation map is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_activity_id: Option<String>,
}

/// Multi-choice vote: toggle this client's vote on `activity_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleVoteRequest {
    pub client_id: String,
    pub activity_id: String,
    /// Whether the client currently shows this activity as selected;
    /// `true` means the toggle retracts the vote, `false` casts it.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_vote_wire_names() {
        let json = r#"{"clientId":"c1","activityId":"a1","previousActivityId":"a0"}"#;
        let req: CastVoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.client_id, "c1");
        assert_eq!(req.previous_activity_id.as_deref(), Some("a0"));
    }

    #[test]
    fn test_previous_activity_id_optional() {
        let json = r#"{"clientId":"c1","activityId":"a1"}"#;
        let req: CastVoteRequest = serde_json::from_str(json).unwrap();
        assert!(req.previous_activity_id.is_none());
    }
}
