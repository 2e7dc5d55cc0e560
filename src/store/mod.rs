//! Vote store - authoritative poll state
//!
//! This module contains the canonical in-memory representation of activities
//! and vote relations, with serialized atomic mutation operations.

mod ops;

use std::collections::{BTreeSet, HashMap};

use parking_lot::Mutex;

use crate::types::{Activity, AddActivityRequest, StoreResult};

/// Inner state guarded by the store mutex
///
/// `activities` keeps insertion order so snapshots are stable across
/// re-renders; `votes` maps each client id to the set of activity ids it has
/// voted for and is the source of truth for every `votes` count.
#[derive(Debug, Default)]
pub(crate) struct PollState {
    pub(crate) activities: Vec<Activity>,
    pub(crate) votes: HashMap<String, BTreeSet<String>>,
}

/// Thread-safe store of activities and votes
///
/// All mutations take the lock for the whole operation, so concurrent callers
/// observe a total order of applied operations and no observer ever sees a
/// state where `votes` counts disagree with the relation map.
pub struct VoteStore {
    state: Mutex<PollState>,
}

impl VoteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PollState::default()),
        }
    }

    /// Create a store pre-populated with activities (zero votes each)
    ///
    /// Requests failing validation are skipped rather than aborting the seed.
    pub fn with_seed(seed: Vec<AddActivityRequest>) -> Self {
        let store = Self::new();
        for req in seed {
            let _ = store.add_activity(req);
        }
        store
    }

    /// Create and append a new activity
    pub fn add_activity(&self, req: AddActivityRequest) -> StoreResult<Activity> {
        ops::add_activity(self, req)
    }

    /// Single-choice vote: move `client_id`'s vote to `activity_id`
    ///
    /// Returns the full snapshot after the mutation, matching the REST
    /// surface which answers a vote with the whole list.
    pub fn cast_vote(
        &self,
        client_id: &str,
        activity_id: &str,
        previous_activity_id: Option<&str>,
    ) -> StoreResult<Vec<Activity>> {
        ops::cast_vote(self, client_id, activity_id, previous_activity_id)
    }

    /// Multi-choice vote: toggle `client_id`'s vote on `activity_id`
    pub fn toggle_vote(
        &self,
        client_id: &str,
        activity_id: &str,
        is_currently_selected: bool,
    ) -> StoreResult<Activity> {
        ops::toggle_vote(self, client_id, activity_id, is_currently_selected)
    }

    /// Delete an activity and every vote relation referencing it
    ///
    /// Idempotent: an unknown id is a no-op returning `None`, since
    /// concurrent duplicate delete requests are possible.
    pub fn remove_activity(&self, activity_id: &str) -> Option<Activity> {
        ops::remove_activity(self, activity_id)
    }

    /// Full current state in insertion order
    pub fn snapshot(&self) -> Vec<Activity> {
        self.state.lock().activities.clone()
    }

    /// Activity ids the given client has currently voted for
    pub fn votes_of(&self, client_id: &str) -> Vec<String> {
        self.state
            .lock()
            .votes
            .get(client_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Total number of live vote relations across all clients
    ///
    /// Always equals the sum of all activity vote counts.
    pub fn relation_count(&self) -> usize {
        self.state.lock().votes.values().map(|set| set.len()).sum()
    }

    pub(crate) fn lock(&self) -> parking_lot::MutexGuard<'_, PollState> {
        self.state.lock()
    }
}

impl Default for VoteStore {
    fn default() -> Self {
        Self::new()
    }
}
