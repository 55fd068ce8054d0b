// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Contention and failure specs
//!
//! Two bookers racing for one workspace, scripted ledger failures, and
//! the partial-booking gap the ledger's missing transactions leave open.

use crate::prelude::*;
use crate::prelude::assert_eq;

#[tokio::test]
async fn first_booker_wins_second_gets_conflict() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;

    let booking = w.workflow.book(request("w1", "u1", 3)).await.unwrap();
    assert_eq!(booking.total_cost, 30);

    let err = w.workflow.book(request("w1", "u2", 2)).await.unwrap_err();
    assert!(matches!(err, BookingError::Conflict { .. }));

    let workspace: Workspace = w.workflow.store().load("w1").await.unwrap();
    assert_eq!(workspace.owner, Some(AccountId::from("u1")));
}

#[tokio::test]
async fn failed_precondition_changes_nothing_on_the_ledger() {
    let w = world();
    let before = booked_workspace("w1", "u1", 10);
    w.workflow.store().save(&before).await.unwrap();
    let writes = w.ledger.set_count();

    let err = w.workflow.book(request("w1", "u2", 2)).await.unwrap_err();
    assert!(matches!(err, BookingError::Conflict { .. }));

    let after: Workspace = w.workflow.store().load("w1").await.unwrap();
    assert_eq!(after, before);
    assert_eq!(w.ledger.set_count(), writes);
}

#[tokio::test]
async fn wallet_rejection_surfaces_verbatim() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;
    w.ledger.reject_sets_matching("preferences_", 1);

    let err = w.workflow.book(request("w1", "u1", 3)).await.unwrap_err();

    assert!(matches!(
        err,
        BookingError::Store(StoreError::Ledger(LedgerError::UserRejected))
    ));
    // Nothing else landed: no booking, workspace untouched.
    assert!(w.workflow.store().load_all::<Booking>().await.unwrap().is_empty());
    let workspace: Workspace = w.workflow.store().load("w1").await.unwrap();
    assert_eq!(workspace.status, WorkspaceStatus::Available);
}

#[tokio::test]
async fn partial_booking_leaves_a_requeryable_truth() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", 10).await;
    w.ledger.fail_sets_matching("workspace_w1", 1);

    let err = w.workflow.book(request("w1", "u1", 3)).await.unwrap_err();
    let booking_id = match err {
        BookingError::PartialBooking { booking_id, .. } => booking_id,
        other => panic!("expected PartialBooking, got {other:?}"),
    };

    // The caller re-queries and sees exactly what the ledger holds: a
    // confirmed booking next to a still-available workspace.
    let bookings = w.workflow.store().load_all::<Booking>().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking_id);
    assert_eq!(bookings[0].status, BookingStatus::Confirmed);

    let listed: Vec<String> = w
        .workflow
        .available_workspaces()
        .await
        .unwrap()
        .iter()
        .map(|ws| ws.id.to_string())
        .collect();
    assert_eq!(listed, vec!["w1".to_string()]);
}

#[tokio::test]
async fn duration_and_cost_guards_hold_end_to_end() {
    let w = world();
    seed_available(&w, "w1", "berlin-1", u64::MAX).await;

    let err = w.workflow.book(request("w1", "u1", 0)).await.unwrap_err();
    assert!(matches!(err, BookingError::InvalidDuration));

    let err = w.workflow.book(request("w1", "u1", 2)).await.unwrap_err();
    assert!(matches!(err, BookingError::CostOverflow { .. }));

    let workspace: Workspace = w.workflow.store().load("w1").await.unwrap();
    assert_eq!(workspace.status, WorkspaceStatus::Available);
}
