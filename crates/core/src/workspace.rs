// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace records and their booking lifecycle.

use crate::account::AccountId;
use crate::envelope::EncryptedEnvelope;
use crate::preferences::MatchCriteria;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

crate::define_id! {
    /// Unique identifier for a bookable workspace.
    pub struct WorkspaceId("wks-");
}

/// Booking lifecycle of a workspace: `available → booked → occupied`,
/// with cancellation returning `booked` to `available`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceStatus {
    #[default]
    Available,
    /// Held by a confirmed booking. Older records spell this `reserved`.
    #[serde(alias = "reserved")]
    Booked,
    /// The booker has checked in.
    Occupied,
}

crate::simple_display! {
    WorkspaceStatus {
        Available => "available",
        Booked => "booked",
        Occupied => "occupied",
    }
}

impl WorkspaceStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, WorkspaceStatus::Available)
    }
}

/// A bookable desk, as stored on the ledger.
///
/// Invariant: any status other than `Available` implies `owner` is set.
/// The booking transitions below uphold it; deserialized records are
/// taken as-is since the ledger is shared with other writers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub location: String,
    #[serde(default)]
    pub features: BTreeSet<String>,
    pub price_per_hour: u64,
    #[serde(default)]
    pub status: WorkspaceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AccountId>,
    /// Denormalized snapshot of the owner's preference envelope, taken at
    /// booking time. The per-account record is the canonical copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_preferences: Option<EncryptedEnvelope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_at_ms: Option<u64>,
}

impl Workspace {
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// The attributes preference envelopes are matched against.
    pub fn match_criteria(&self) -> MatchCriteria {
        MatchCriteria {
            location: self.location.clone(),
            features: self.features.clone(),
        }
    }

    /// Transition to `Booked`, recording owner, preference snapshot, and
    /// booking time together.
    pub fn book(&mut self, owner: AccountId, preferences: EncryptedEnvelope, at_ms: u64) {
        self.status = WorkspaceStatus::Booked;
        self.owner = Some(owner);
        self.encrypted_preferences = Some(preferences);
        self.booked_at_ms = Some(at_ms);
    }

    /// Return to `Available`, clearing everything `book` set.
    pub fn release(&mut self) {
        self.status = WorkspaceStatus::Available;
        self.owner = None;
        self.encrypted_preferences = None;
        self.booked_at_ms = None;
    }
}

crate::builder! {
    pub struct WorkspaceBuilder => Workspace {
        into {
            id: WorkspaceId = WorkspaceId::new(),
            location: String = "berlin-2",
        }
        set {
            features: BTreeSet<String> = BTreeSet::new(),
            price_per_hour: u64 = 10,
            status: WorkspaceStatus = WorkspaceStatus::Available,
        }
        option {
            owner: AccountId = None,
            encrypted_preferences: EncryptedEnvelope = None,
            booked_at_ms: u64 = None,
        }
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
