// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::booking::{Booking, BookingStatus};
use crate::envelope::EncryptedEnvelope;
use crate::workspace::{Workspace, WorkspaceStatus};
use std::collections::BTreeSet;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core record types.
pub mod strategies {
    use crate::envelope::EncryptedEnvelope;
    use crate::preferences::UserPreferences;
    use crate::workspace::WorkspaceStatus;
    use proptest::collection::{btree_set, vec};
    use proptest::prelude::*;

    pub fn arb_preferences() -> impl Strategy<Value = UserPreferences> {
        (1u8..=5, any::<bool>(), 1u8..=3, btree_set("[a-z_]{1,12}", 0..4)).prop_map(
            |(noise_level, window_view, privacy_level, amenities)| UserPreferences {
                noise_level,
                window_view,
                privacy_level,
                amenities,
            },
        )
    }

    pub fn arb_workspace_status() -> impl Strategy<Value = WorkspaceStatus> {
        prop_oneof![
            Just(WorkspaceStatus::Available),
            Just(WorkspaceStatus::Booked),
            Just(WorkspaceStatus::Occupied),
        ]
    }

    pub fn arb_envelope() -> impl Strategy<Value = EncryptedEnvelope> {
        ("[A-Z]{2,6}", vec(any::<u8>(), 0..64)).prop_filter_map(
            "scheme tag must be separator-free",
            |(tag, bytes)| EncryptedEnvelope::new(tag, bytes).ok(),
        )
    }
}

// ── Record factory functions ────────────────────────────────────────────

/// Envelope under the simulated scheme tag.
// Allow expect here as the constant tag is known to be valid
#[allow(clippy::expect_used)]
pub fn fhe_envelope(plaintext: &[u8]) -> EncryptedEnvelope {
    EncryptedEnvelope::new("FHE", plaintext.to_vec()).expect("constant scheme tag is valid")
}

pub fn available_workspace(id: &str, location: &str, price_per_hour: u64) -> Workspace {
    Workspace {
        id: id.into(),
        location: location.to_string(),
        features: BTreeSet::new(),
        price_per_hour,
        status: WorkspaceStatus::Available,
        owner: None,
        encrypted_preferences: None,
        booked_at_ms: None,
    }
}

pub fn booked_workspace(id: &str, owner: &str, price_per_hour: u64) -> Workspace {
    let mut ws = available_workspace(id, "berlin-2", price_per_hour);
    ws.book(owner.into(), fhe_envelope(b"{}"), 1_000_000);
    ws
}

pub fn confirmed_booking(id: &str, workspace_id: &str, user_id: &str) -> Booking {
    Booking {
        id: id.into(),
        workspace_id: workspace_id.into(),
        user_id: user_id.into(),
        duration_hours: 3,
        total_cost: 30,
        created_at_ms: 1_000_000,
        status: BookingStatus::Confirmed,
    }
}
