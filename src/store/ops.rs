//! Mutation operations for the vote store
//!
//! Every function here holds the store lock for its entire body, so each
//! mutation is one atomic step in the store's total order.

use crate::types::{Activity, AddActivityRequest, StoreError, StoreResult};

use super::{PollState, VoteStore};

/// Create a new activity (thread-safe: holds lock during entire operation)
pub fn add_activity(store: &VoteStore, req: AddActivityRequest) -> StoreResult<Activity> {
    let title = req.title.trim().to_string();
    let url = req.url.trim().to_string();

    if title.is_empty() {
        return Err(StoreError::Validation("title is required".to_string()));
    }
    if url.is_empty() {
        return Err(StoreError::Validation("url is required".to_string()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(StoreError::Validation(format!(
            "url must be http(s), got '{}'",
            url
        )));
    }

    let activity = Activity::new(
        title,
        url,
        req.description.filter(|d| !d.trim().is_empty()),
        req.tags,
    );

    let mut state = store.lock();
    state.activities.push(activity.clone());
    Ok(activity)
}

/// Single-choice vote (thread-safe: holds lock during entire operation)
///
/// The retract-previous and cast-new steps happen under one lock acquisition,
/// so no snapshot ever shows a vote removed from one activity but not yet
/// added to another.
pub fn cast_vote(
    store: &VoteStore,
    client_id: &str,
    activity_id: &str,
    previous_activity_id: Option<&str>,
) -> StoreResult<Vec<Activity>> {
    let mut state = store.lock();

    if !state.activities.iter().any(|a| a.id == activity_id) {
        return Err(StoreError::NotFound(activity_id.to_string()));
    }

    // The client sends previousActivityId as its own belief; the relation map
    // governs, which makes a stale or duplicated hint harmless.
    let prior: Vec<String> = state
        .votes
        .get(client_id)
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default();
    if let Some(prev) = previous_activity_id {
        if !prior.iter().any(|p| p == prev) {
            tracing::debug!(client_id, prev, "stale previousActivityId hint ignored");
        }
    }

    for prev_id in &prior {
        if prev_id != activity_id {
            decrement(&mut state, prev_id);
        }
    }

    let inserted = {
        let set = state.votes.entry(client_id.to_string()).or_default();
        set.retain(|id| id == activity_id);
        set.insert(activity_id.to_string())
    };
    if inserted {
        increment(&mut state, activity_id);
    }

    Ok(state.activities.clone())
}

/// Multi-choice vote toggle (thread-safe: holds lock during entire operation)
///
/// Redundant toggles are normalized against the relation map: removing an
/// absent vote or re-inserting a present one leaves the count untouched.
pub fn toggle_vote(
    store: &VoteStore,
    client_id: &str,
    activity_id: &str,
    is_currently_selected: bool,
) -> StoreResult<Activity> {
    let mut state = store.lock();

    if !state.activities.iter().any(|a| a.id == activity_id) {
        return Err(StoreError::NotFound(activity_id.to_string()));
    }

    let delta: i32 = {
        let set = state.votes.entry(client_id.to_string()).or_default();
        if is_currently_selected {
            if set.remove(activity_id) {
                -1
            } else {
                0
            }
        } else if set.insert(activity_id.to_string()) {
            1
        } else {
            0
        }
    };
    match delta {
        1 => increment(&mut state, activity_id),
        -1 => decrement(&mut state, activity_id),
        _ => {}
    }

    let activity = state
        .activities
        .iter()
        .find(|a| a.id == activity_id)
        .cloned()
        .ok_or_else(|| StoreError::NotFound(activity_id.to_string()))?;
    Ok(activity)
}

/// Delete an activity and all its votes (thread-safe, idempotent)
pub fn remove_activity(store: &VoteStore, activity_id: &str) -> Option<Activity> {
    let mut state = store.lock();

    let pos = state.activities.iter().position(|a| a.id == activity_id)?;
    let removed = state.activities.remove(pos);

    for set in state.votes.values_mut() {
        set.remove(activity_id);
    }
    state.votes.retain(|_, set| !set.is_empty());

    Some(removed)
}

fn increment(state: &mut PollState, activity_id: &str) {
    if let Some(a) = state.activities.iter_mut().find(|a| a.id == activity_id) {
        a.votes += 1;
    }
}

fn decrement(state: &mut PollState, activity_id: &str) {
    if let Some(a) = state.activities.iter_mut().find(|a| a.id == activity_id) {
        a.votes = a.votes.saturating_sub(1);
    }
}
