//! Subscriber registry and event fan-out
//!
//! An explicit registry of connection handles keyed by id, rather than
//! ambient socket-server state: the WS handler owns the receiving half of a
//! per-subscriber channel, the hub owns the sending halves. Delivery is
//! best-effort; a subscriber whose channel is gone is pruned, never retried.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::mpsc;

use super::events::{PollEvent, WsMessage};
use crate::types::Activity;

/// Opaque subscriber handle returned by [`BroadcastHub::subscribe`]
pub type SubscriberId = u64;

/// Fan-out hub for poll events
pub struct BroadcastHub {
    subscribers: Mutex<HashMap<SubscriberId, mpsc::UnboundedSender<WsMessage>>>,
    next_subscriber_id: AtomicU64,
    sequence_counter: AtomicU64,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(HashMap::new()),
            next_subscriber_id: AtomicU64::new(0),
            sequence_counter: AtomicU64::new(0),
        }
    }

    /// Register a new subscriber and immediately queue the current snapshot
    ///
    /// A late joiner never waits for the next mutation to see current state:
    /// the snapshot is the first message on the returned receiver, ahead of
    /// any event published after this call.
    pub fn subscribe(
        &self,
        snapshot: Vec<Activity>,
    ) -> (SubscriberId, mpsc::UnboundedReceiver<WsMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.next_subscriber_id.fetch_add(1, Ordering::SeqCst);

        let mut subscribers = self.subscribers.lock();
        let _ = tx.send(self.wrap(PollEvent::Activities { payload: snapshot }));
        subscribers.insert(id, tx);
        drop(subscribers);

        tracing::debug!(subscriber_id = id, "subscriber joined");
        (id, rx)
    }

    /// Remove a subscriber; safe to call repeatedly or for an unknown id
    pub fn unsubscribe(&self, id: SubscriberId) {
        if self.subscribers.lock().remove(&id).is_some() {
            tracing::debug!(subscriber_id = id, "subscriber left");
        }
    }

    /// Deliver an event to every registered subscriber
    ///
    /// Sends are FIFO per subscriber and never block on a slow one; a
    /// subscriber whose receiving task has gone away is dropped from the
    /// registry. A missed event is masked by the snapshot resend on its next
    /// reconnect.
    pub fn publish(&self, event: PollEvent) {
        let msg = self.wrap(event);

        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|id, tx| {
            let alive = tx.send(msg.clone()).is_ok();
            if !alive {
                tracing::debug!(subscriber_id = *id, "dropping dead subscriber");
            }
            alive
        });
    }

    /// Number of currently registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Get the current sequence ID
    pub fn current_sequence_id(&self) -> u64 {
        self.sequence_counter.load(Ordering::SeqCst)
    }

    fn wrap(&self, event: PollEvent) -> WsMessage {
        let seq = self.sequence_counter.fetch_add(1, Ordering::SeqCst);
        WsMessage {
            event,
            sequence_id: seq,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new()
    }
}
