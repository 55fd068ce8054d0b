// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desk preferences and the workspace attributes they are matched against.
//!
//! Plaintext preferences exist only transiently on the client side of the
//! cipher boundary. Once encrypted they travel and persist exclusively as
//! an [`EncryptedEnvelope`](crate::EncryptedEnvelope); nothing outside the
//! cipher layer should hold a `UserPreferences` read back from storage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Valid range for [`UserPreferences::noise_level`].
pub const NOISE_LEVEL_RANGE: RangeInclusive<u8> = 1..=5;

/// Valid range for [`UserPreferences::privacy_level`].
pub const PRIVACY_LEVEL_RANGE: RangeInclusive<u8> = 1..=3;

/// What a user wants from a desk. Plaintext, pre-encryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Tolerated ambient noise, 1 (silent) to 5 (loud).
    pub noise_level: u8,
    pub window_view: bool,
    /// Desired seclusion, 1 (open floor) to 3 (private room).
    pub privacy_level: u8,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
}

impl UserPreferences {
    /// Check the numeric fields against their documented ranges.
    pub fn validate(&self) -> Result<(), PreferenceRangeError> {
        check_range("noise_level", self.noise_level, NOISE_LEVEL_RANGE)?;
        check_range("privacy_level", self.privacy_level, PRIVACY_LEVEL_RANGE)?;
        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: u8,
    range: RangeInclusive<u8>,
) -> Result<(), PreferenceRangeError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(PreferenceRangeError {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// A preference field is outside its valid range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {value} outside {min}..={max}")]
pub struct PreferenceRangeError {
    pub field: &'static str,
    pub value: u8,
    pub min: u8,
    pub max: u8,
}

/// Workspace-side attributes an encrypted preference envelope is matched
/// against. Derived from the candidate workspace, never from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCriteria {
    pub location: String,
    #[serde(default)]
    pub features: BTreeSet<String>,
}

crate::builder! {
    pub struct UserPreferencesBuilder => UserPreferences {
        set {
            noise_level: u8 = 3,
            window_view: bool = true,
            privacy_level: u8 = 2,
            amenities: BTreeSet<String> = BTreeSet::new(),
        }
    }
}

#[cfg(test)]
#[path = "preferences_tests.rs"]
mod tests;
