//! Shared application state

use std::sync::Arc;

use crate::store::VoteStore;

use super::events::PollEvent;
use super::hub::BroadcastHub;

/// Shared state for REST handlers and WebSocket connections
pub struct AppState {
    /// The authoritative vote store
    pub store: Arc<VoteStore>,

    /// Fan-out hub for connected WebSocket clients
    pub hub: BroadcastHub,
}

impl AppState {
    /// Create a new AppState around the given store
    pub fn new(store: Arc<VoteStore>) -> Self {
        Self {
            store,
            hub: BroadcastHub::new(),
        }
    }

    /// Broadcast an incremental event to all connected clients
    pub fn broadcast(&self, event: PollEvent) {
        self.hub.publish(event);
    }

    /// Broadcast a full snapshot of the store to all connected clients
    ///
    /// Used after mutations touching more than one activity so every
    /// observer sees the combined result as one message.
    pub fn broadcast_snapshot(&self) {
        self.hub.publish(PollEvent::Activities {
            payload: self.store.snapshot(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AddActivityRequest;

    #[tokio::test]
    async fn test_broadcast_snapshot_reflects_store() {
        let store = Arc::new(VoteStore::new());
        let state = AppState::new(store.clone());

        let (_, mut rx) = state.hub.subscribe(store.snapshot());
        rx.recv().await.unwrap(); // initial snapshot

        store
            .add_activity(AddActivityRequest::new("Bowling", "https://example.com"))
            .unwrap();
        state.broadcast_snapshot();

        let msg = rx.recv().await.unwrap();
        match msg.event {
            PollEvent::Activities { payload } => {
                assert_eq!(payload.len(), 1);
                assert_eq!(payload[0].title, "Bowling");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
