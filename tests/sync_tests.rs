//! Synchronization property tests
//!
//! Conservation, late-joiner convergence, and client-side reconciliation,
//! all without a real network.

use std::sync::Arc;

use team_poll::api::websocket::events::PollEvent;
use team_poll::api::websocket::state::AppState;
use team_poll::client::{next_delay, PollView};
use team_poll::config::VoteMode;
use team_poll::store::VoteStore;
use team_poll::types::AddActivityRequest;

fn seeded_store(titles: &[&str]) -> (VoteStore, Vec<String>) {
    let store = VoteStore::new();
    let ids = titles
        .iter()
        .map(|t| {
            store
                .add_activity(AddActivityRequest::new(
                    *t,
                    format!("https://example.com/{}", t.to_lowercase()),
                ))
                .unwrap()
                .id
        })
        .collect();
    (store, ids)
}

/// Conservation: sum of vote counts equals the number of live relations at
/// every point of an arbitrary cast/toggle sequence.
#[test]
fn test_vote_count_conservation() {
    let (store, ids) = seeded_store(&["A", "B", "C"]);
    let clients = ["c1", "c2", "c3", "c4"];

    let check = |store: &VoteStore| {
        let total: u32 = store.snapshot().iter().map(|a| a.votes).sum();
        assert_eq!(total as usize, store.relation_count());
    };

    // Mixed, deliberately redundant sequence
    for (i, client) in clients.iter().enumerate() {
        store.cast_vote(client, &ids[i % 3], None).unwrap();
        check(&store);
    }
    store.cast_vote("c1", &ids[1], Some(ids[0].as_str())).unwrap();
    check(&store);
    // Duplicate request with a now-stale hint
    store.cast_vote("c1", &ids[1], Some(ids[0].as_str())).unwrap();
    check(&store);

    let (store, ids) = seeded_store(&["X", "Y"]);
    for selected in [false, false, true, true, false] {
        store.toggle_vote("c1", &ids[0], selected).unwrap();
        check(&store);
    }
    store.toggle_vote("c2", &ids[1], false).unwrap();
    store.remove_activity(&ids[1]);
    check(&store);
}

/// A subscriber connecting after N mutations immediately receives a snapshot
/// reflecting all of them.
#[tokio::test]
async fn test_late_joiner_convergence() {
    let store = Arc::new(VoteStore::new());
    let state = AppState::new(store.clone());

    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        let a = store
            .add_activity(AddActivityRequest::new(
                title,
                format!("https://example.com/{}", title),
            ))
            .unwrap();
        state.broadcast(PollEvent::Added { payload: a.clone() });
        ids.push(a.id);
    }
    store.cast_vote("c1", &ids[0], None).unwrap();
    state.broadcast_snapshot();
    store.cast_vote("c2", &ids[0], None).unwrap();
    state.broadcast_snapshot();

    // Joins only now, having missed all five broadcasts
    let (_, mut rx) = state.hub.subscribe(store.snapshot());
    let first = rx.recv().await.unwrap();
    match first.event {
        PollEvent::Activities { payload } => {
            assert_eq!(payload.len(), 3);
            assert_eq!(payload[0].votes, 2);
        }
        other => panic!("expected snapshot first, got {:?}", other),
    }
}

/// Two observers may interleave differently, but each sees events in publish
/// order and both converge on the same final state.
#[tokio::test]
async fn test_observers_converge_on_same_state() {
    let store = Arc::new(VoteStore::new());
    let state = AppState::new(store.clone());

    let (_, mut rx1) = state.hub.subscribe(store.snapshot());
    let (_, mut rx2) = state.hub.subscribe(store.snapshot());

    let a = store
        .add_activity(AddActivityRequest::new("A", "https://example.com/a"))
        .unwrap();
    state.broadcast(PollEvent::Added { payload: a.clone() });
    store.toggle_vote("c1", &a.id, false).unwrap();
    let updated = store.snapshot().remove(0);
    state.broadcast(PollEvent::Updated { payload: updated });

    let mut views = Vec::new();
    for rx in [&mut rx1, &mut rx2] {
        let mut view = PollView::new(VoteMode::MultiChoice);
        for _ in 0..3 {
            view.apply_server(rx.recv().await.unwrap());
        }
        views.push(view.activities());
    }

    assert_eq!(views[0].len(), 1);
    assert_eq!(views[0][0].votes, 1);
    assert_eq!(
        serde_json::to_value(&views[0]).unwrap(),
        serde_json::to_value(&views[1]).unwrap()
    );
}

/// A reconnect snapshot erases any stale optimistic prediction left behind
/// by a request that never completed.
#[tokio::test]
async fn test_reconnect_snapshot_corrects_optimistic_state() {
    let store = Arc::new(VoteStore::new());
    let state = AppState::new(store.clone());
    let a = store
        .add_activity(AddActivityRequest::new("A", "https://example.com/a"))
        .unwrap();

    let mut view = PollView::new(VoteMode::SingleChoice);
    let (id, mut rx) = state.hub.subscribe(store.snapshot());
    view.apply_server(rx.recv().await.unwrap());

    // Fire-and-forget vote whose request is lost in transit
    view.predict_cast(&a.id);
    assert_eq!(view.activities()[0].votes, 1);

    // Connection drops, client reconnects, server resends its snapshot
    state.hub.unsubscribe(id);
    let (_, mut rx) = state.hub.subscribe(store.snapshot());
    view.apply_server(rx.recv().await.unwrap());

    assert_eq!(view.activities()[0].votes, 0);
}

#[test]
fn test_backoff_sequence_matches_schedule() {
    use std::time::Duration;

    let ceiling = Duration::from_secs(10);
    let mut delay = Duration::from_secs(1);
    let mut observed = vec![delay];
    for _ in 0..5 {
        delay = next_delay(delay, ceiling);
        observed.push(delay);
    }

    let secs: Vec<u64> = observed.iter().map(|d| d.as_secs()).collect();
    assert_eq!(secs, vec![1, 2, 4, 8, 10, 10]);
}
