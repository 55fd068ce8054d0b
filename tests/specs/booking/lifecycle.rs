// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Booking lifecycle specs
//!
//! The reference scenario end to end: book, inspect both records,
//! cancel, rebook, and the read-side views along the way.

use crate::prelude::*;
use crate::prelude::assert_eq;
use std::time::Duration;

#[tokio::test]
async fn booking_prices_three_hours_at_ten_to_thirty() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;

    let booking = w.workflow.book(request("w1", "u1", 3)).await.unwrap();

    assert_eq!(booking.total_cost, 30);
    assert_eq!(booking.user_id, AccountId::from("u1"));
    assert_eq!(booking.status, BookingStatus::Confirmed);

    let workspace: Workspace = w.workflow.store().load("w1").await.unwrap();
    assert_eq!(workspace.status, WorkspaceStatus::Booked);
    assert_eq!(workspace.owner, Some(AccountId::from("u1")));
}

#[tokio::test]
async fn cancel_then_rebook_by_another_account() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;

    let first = w.workflow.book(request("w1", "u1", 3)).await.unwrap();
    w.clock.advance(Duration::from_secs(3600));
    w.workflow.cancel(&"w1".into(), &"u1".into()).await.unwrap();

    let released: Workspace = w.workflow.store().load("w1").await.unwrap();
    assert_eq!(released.status, WorkspaceStatus::Available);
    assert_eq!(released.owner, None);
    assert_eq!(released.encrypted_preferences, None);

    let second = w.workflow.book(request("w1", "u2", 2)).await.unwrap();
    assert_eq!(second.total_cost, 20);
    assert_eq!(second.created_at_ms, first.created_at_ms + 3_600_000);

    // Both bookings stay on the ledger; only the first is cancelled.
    let bookings = w.workflow.store().load_all::<Booking>().await.unwrap();
    assert_eq!(bookings.len(), 2);
    let first_stored = bookings.iter().find(|b| b.id == first.id).unwrap();
    assert_eq!(first_stored.status, BookingStatus::Cancelled);
    let second_stored = bookings.iter().find(|b| b.id == second.id).unwrap();
    assert_eq!(second_stored.status, BookingStatus::Confirmed);
}

#[tokio::test]
async fn workspace_snapshot_agrees_with_canonical_envelope() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;

    w.workflow.book(request("w1", "u1", 3)).await.unwrap();

    let workspace: Workspace = w.workflow.store().load("w1").await.unwrap();
    let canonical = w
        .workflow
        .store()
        .load_preferences(&AccountId::from("u1"))
        .await
        .unwrap();
    assert_eq!(workspace.encrypted_preferences, canonical);
}

#[tokio::test]
async fn read_views_track_the_ledger() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;
    seed_available(&w, "w2", "berlin-1", 12).await;
    seed_available(&w, "w3", "paris-9", 8).await;

    w.workflow.book(request("w1", "u1", 3)).await.unwrap();
    w.clock.advance(Duration::from_secs(60));
    w.workflow.book(request("w3", "u2", 1)).await.unwrap();

    let available: Vec<String> = w
        .workflow
        .available_workspaces()
        .await
        .unwrap()
        .iter()
        .map(|ws| ws.id.to_string())
        .collect();
    assert_eq!(available, vec!["w2".to_string()]);

    let matching: Vec<String> = w
        .workflow
        .matching_workspaces(&encrypted_prefs())
        .await
        .unwrap()
        .iter()
        .map(|ws| ws.id.to_string())
        .collect();
    assert_eq!(matching, vec!["w2".to_string()]);

    let recent: Vec<String> = w
        .workflow
        .workspaces_by_recency()
        .await
        .unwrap()
        .iter()
        .map(|ws| ws.id.to_string())
        .collect();
    assert_eq!(
        recent,
        vec!["w3".to_string(), "w1".to_string(), "w2".to_string()]
    );
}
