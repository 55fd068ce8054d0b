// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared harness for the workspace-level specs.

pub use std::sync::Arc;

pub use similar_asserts::assert_eq;

pub use hush_cipher::{PreferenceCipher, SimulatedFheCipher};
pub use hush_core::test_support::{available_workspace, booked_workspace};
pub use hush_core::{
    AccountId, Booking, BookingStatus, EncryptedEnvelope, FakeClock, UserPreferences, Workspace,
    WorkspaceStatus,
};
pub use hush_engine::{BookingError, BookingRequest, BookingWorkflow, MatchingEngine};
pub use hush_ledger::{Ledger, LedgerError, MemoryLedger};
pub use hush_store::{RecordStore, StoreError};

pub type TestWorkflow = BookingWorkflow<FakeClock>;

/// Full stack over a shared in-memory ledger, with handles for fault
/// injection and raw byte inspection.
pub struct World {
    pub ledger: MemoryLedger,
    pub clock: FakeClock,
    pub workflow: TestWorkflow,
}

pub fn world() -> World {
    let ledger = MemoryLedger::new();
    let clock = FakeClock::new();
    let workflow = workflow_over(Arc::new(ledger.clone()), clock.clone());
    World {
        ledger,
        clock,
        workflow,
    }
}

pub fn workflow_over(ledger: Arc<dyn Ledger>, clock: FakeClock) -> TestWorkflow {
    let store = RecordStore::new(ledger);
    let matcher = MatchingEngine::new(Arc::new(SimulatedFheCipher::new()));
    BookingWorkflow::new(store, matcher, clock)
}

pub fn preferences() -> UserPreferences {
    UserPreferences {
        noise_level: 2,
        window_view: true,
        privacy_level: 2,
        amenities: ["standing_desk".to_string()].into(),
    }
}

pub fn encrypted_prefs() -> EncryptedEnvelope {
    SimulatedFheCipher::new()
        .encrypt(&preferences())
        .expect("valid preferences encrypt")
}

pub fn request(workspace_id: &str, user: &str, duration_hours: u32) -> BookingRequest {
    BookingRequest {
        workspace_id: workspace_id.into(),
        user: user.into(),
        duration_hours,
        envelope: encrypted_prefs(),
    }
}

pub async fn seed_available(world: &World, id: &str, location: &str, price_per_hour: u64) {
    world
        .workflow
        .store()
        .save(&available_workspace(id, location, price_per_hour))
        .await
        .expect("seeding workspace");
}
