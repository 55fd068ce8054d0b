// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durability specs
//!
//! The same workflow over the file-backed ledger: records survive a
//! full close-and-reopen of the data directory.

use crate::prelude::*;
use crate::prelude::assert_eq;
use hush_ledger::FileLedger;

/// Let the registry writer tasks drain so their ledger handles (and the
/// exclusive lock) are released before reopening.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn bookings_survive_ledger_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let booking_id;

    {
        let ledger = FileLedger::open(dir.path()).unwrap();
        let workflow = workflow_over(Arc::new(ledger), FakeClock::new());
        workflow
            .store()
            .save(&available_workspace("w1", "berlin-1", 10))
            .await
            .unwrap();
        booking_id = workflow.book(request("w1", "u1", 3)).await.unwrap().id;
    }
    settle().await;

    let ledger = FileLedger::open(dir.path()).unwrap();
    let workflow = workflow_over(Arc::new(ledger), FakeClock::new());

    let workspace: Workspace = workflow.store().load("w1").await.unwrap();
    assert_eq!(workspace.status, WorkspaceStatus::Booked);
    assert_eq!(workspace.owner, Some(AccountId::from("u1")));

    let booking: Booking = workflow.store().load(booking_id.as_str()).await.unwrap();
    assert_eq!(booking.total_cost, 30);

    let canonical = workflow
        .store()
        .load_preferences(&AccountId::from("u1"))
        .await
        .unwrap();
    assert_eq!(canonical, Some(encrypted_prefs()));
}

#[tokio::test]
async fn reopened_registry_keeps_appending() {
    let dir = tempfile::tempdir().unwrap();

    {
        let ledger = FileLedger::open(dir.path()).unwrap();
        let workflow = workflow_over(Arc::new(ledger), FakeClock::new());
        workflow
            .store()
            .save(&available_workspace("w1", "berlin-1", 10))
            .await
            .unwrap();
    }
    settle().await;

    let ledger = FileLedger::open(dir.path()).unwrap();
    let workflow = workflow_over(Arc::new(ledger), FakeClock::new());
    workflow
        .store()
        .save(&available_workspace("w2", "berlin-1", 12))
        .await
        .unwrap();

    let ids = workflow
        .store()
        .registry()
        .list_all("workspace_keys")
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], "w1");
    assert_eq!(ids[1], "w2");
}
