// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrency specs
//!
//! Many writers, one ledger: the registry must not lose ids no matter
//! how saves interleave.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[tokio::test(flavor = "multi_thread")]
async fn parallel_seeding_loses_no_workspace() {
    let w = world();
    let store = w.workflow.store().clone();

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .save(&available_workspace(&format!("w{i}"), "berlin-1", 10))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let ids = store.registry().list_all("workspace_keys").await.unwrap();
    assert_eq!(ids.len(), 16);
    let loaded = store.load_all::<Workspace>().await.unwrap();
    assert_eq!(loaded.len(), 16);
}

#[tokio::test]
async fn concurrent_bookings_of_distinct_workspaces_all_land() {
    let w = world();
    for id in ["w1", "w2", "w3"] {
        seed_available(&w, id, "berlin-1", 10).await;
    }

    let (a, b, c) = tokio::join!(
        w.workflow.book(request("w1", "u1", 1)),
        w.workflow.book(request("w2", "u2", 2)),
        w.workflow.book(request("w3", "u3", 3)),
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();

    let bookings = w.workflow.store().load_all::<Booking>().await.unwrap();
    assert_eq!(bookings.len(), 3);
    let booked = w.workflow.store().load_all::<Workspace>().await.unwrap();
    assert!(booked.iter().all(|ws| ws.status == WorkspaceStatus::Booked));
}

#[tokio::test]
async fn save_is_republish_safe_for_the_same_id() {
    let w = world();
    let store = w.workflow.store();

    // Same workspace saved repeatedly (seed, book, cancel all rewrite
    // it); the index must hold the id exactly once.
    seed_available(&w, "w1", "berlin-1", 10).await;
    w.workflow.book(request("w1", "u1", 3)).await.unwrap();
    w.workflow.cancel(&"w1".into(), &"u1".into()).await.unwrap();

    let ids = store.registry().list_all("workspace_keys").await.unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0], "w1");
}
