//! WebSocket event types for real-time poll updates

use serde::{Deserialize, Serialize};

use crate::types::Activity;

/// Poll events broadcast to WebSocket clients
///
/// `Activities` is the full-snapshot variant used on connect and after any
/// mutation touching more than one activity; the other variants are
/// incremental and scoped to a single activity.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PollEvent {
    /// Full snapshot of all activities in insertion order
    Activities { payload: Vec<Activity> },

    /// A new activity was created
    Added { payload: Activity },

    /// An activity changed (vote count moved)
    Updated { payload: Activity },

    /// An activity was deleted
    Removed { payload: Activity },
}

/// WebSocket message wrapper with metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WsMessage {
    /// The poll event
    #[serde(flatten)]
    pub event: PollEvent,

    /// Monotonically increasing sequence ID for gap detection
    pub sequence_id: u64,

    /// Unix timestamp when event was created
    pub timestamp: i64,
}

/// Client message types
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ping for heartbeat
    Ping,
}

/// Pong response message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PongMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
}

impl Default for PongMessage {
    fn default() -> Self {
        Self {
            msg_type: "pong".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_event_serialization() {
        let event = PollEvent::Activities {
            payload: vec![Activity::new(
                "Bowling".to_string(),
                "https://example.com/bowling".to_string(),
                None,
                vec!["Indoor".to_string()],
            )],
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"activities""#));
        assert!(json.contains("Bowling"));
    }

    #[test]
    fn test_ws_message_carries_sequence_id() {
        let msg = WsMessage {
            event: PollEvent::Activities { payload: vec![] },
            sequence_id: 42,
            timestamp: 1234567890,
        };

        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("sequence_id"));
        assert!(json.contains("42"));
    }

    #[test]
    fn test_client_message_parsing() {
        let json = r#"{"type":"ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_incremental_event_round_trip() {
        let activity = Activity::new(
            "Karting".to_string(),
            "https://example.com/karting".to_string(),
            None,
            vec![],
        );
        let json = serde_json::to_string(&PollEvent::Updated {
            payload: activity.clone(),
        })
        .unwrap();

        let parsed: PollEvent = serde_json::from_str(&json).unwrap();
        match parsed {
            PollEvent::Updated { payload } => assert_eq!(payload.id, activity.id),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
