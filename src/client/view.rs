//! Client-side poll view with optimistic reconciliation
//!
//! Two-layer state: the confirmed list (last authoritative snapshot plus
//! incremental events) and a pending overlay of optimistic local deltas.
//! The displayed list is a pure merge of the two; the server is always the
//! last writer.

use std::collections::{BTreeSet, HashMap};

use crate::api::websocket::events::{PollEvent, WsMessage};
use crate::config::VoteMode;
use crate::types::Activity;

/// Locally displayed poll state, the only component the presentation layer
/// talks to
pub struct PollView {
    mode: VoteMode,
    /// Last authoritative list, insertion order preserved
    confirmed: Vec<Activity>,
    /// Optimistic per-activity vote deltas, keyed by activity id
    pending: HashMap<String, i64>,
    /// This client's own vote set (at most one element in single-choice mode)
    my_votes: BTreeSet<String>,
}

impl PollView {
    pub fn new(mode: VoteMode) -> Self {
        Self {
            mode,
            confirmed: Vec::new(),
            pending: HashMap::new(),
            my_votes: BTreeSet::new(),
        }
    }

    /// Merge an inbound authoritative message
    ///
    /// A snapshot replaces the confirmed list wholesale and erases every
    /// pending prediction (the convergence point). Incremental events update
    /// one activity and clear only that activity's pending entry; unknown ids
    /// on update/remove are ignored rather than erroring.
    pub fn apply_server(&mut self, msg: WsMessage) {
        match msg.event {
            PollEvent::Activities { payload } => {
                self.confirmed = payload;
                self.pending.clear();
            }
            PollEvent::Added { payload } => {
                self.pending.remove(&payload.id);
                if !self.confirmed.iter().any(|a| a.id == payload.id) {
                    self.confirmed.push(payload);
                }
            }
            PollEvent::Updated { payload } => {
                self.pending.remove(&payload.id);
                if let Some(slot) = self.confirmed.iter_mut().find(|a| a.id == payload.id) {
                    *slot = payload;
                }
            }
            PollEvent::Removed { payload } => {
                self.pending.remove(&payload.id);
                self.my_votes.remove(&payload.id);
                self.confirmed.retain(|a| a.id != payload.id);
            }
        }
    }

    /// Optimistic single-choice vote: applied immediately, reconciled when
    /// the authoritative snapshot arrives
    pub fn predict_cast(&mut self, activity_id: &str) {
        debug_assert_eq!(self.mode, VoteMode::SingleChoice);
        if self.my_votes.contains(activity_id) {
            return;
        }
        for prev in std::mem::take(&mut self.my_votes) {
            *self.pending.entry(prev).or_insert(0) -= 1;
        }
        *self.pending.entry(activity_id.to_string()).or_insert(0) += 1;
        self.my_votes.insert(activity_id.to_string());
    }

    /// Optimistic multi-choice toggle
    pub fn predict_toggle(&mut self, activity_id: &str, is_currently_selected: bool) {
        debug_assert_eq!(self.mode, VoteMode::MultiChoice);
        if is_currently_selected {
            if self.my_votes.remove(activity_id) {
                *self.pending.entry(activity_id.to_string()).or_insert(0) -= 1;
            }
        } else if self.my_votes.insert(activity_id.to_string()) {
            *self.pending.entry(activity_id.to_string()).or_insert(0) += 1;
        }
    }

    /// The displayed list: confirmed state with pending deltas applied
    pub fn activities(&self) -> Vec<Activity> {
        self.confirmed
            .iter()
            .map(|a| {
                let mut merged = a.clone();
                if let Some(delta) = self.pending.get(&a.id) {
                    merged.votes = (i64::from(merged.votes) + delta).max(0) as u32;
                }
                merged
            })
            .collect()
    }

    /// Whether this client currently shows a vote on the given activity
    pub fn is_mine(&self, activity_id: &str) -> bool {
        self.my_votes.contains(activity_id)
    }

    /// This client's current selections
    pub fn my_votes(&self) -> Vec<String> {
        self.my_votes.iter().cloned().collect()
    }

    /// Restore selections persisted from an earlier session
    pub fn restore_votes(&mut self, ids: impl IntoIterator<Item = String>) {
        self.my_votes = ids.into_iter().collect();
        if self.mode == VoteMode::SingleChoice && self.my_votes.len() > 1 {
            let keep = self.my_votes.iter().next().cloned();
            self.my_votes.clear();
            self.my_votes.extend(keep);
        }
    }
}
