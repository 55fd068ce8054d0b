// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger key layout.
//!
//! These names are shared with every other client of the ledger and
//! must not change: `workspace_<id>`, `booking_<id>`, `workspace_keys`,
//! `booking_keys`, `preferences_<accountId>`.

use hush_core::{AccountId, Booking, Workspace};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Index of all workspace ids.
pub const WORKSPACE_INDEX: &str = "workspace_keys";

/// Index of all booking ids.
pub const BOOKING_INDEX: &str = "booking_keys";

const PREFERENCES_PREFIX: &str = "preferences";

/// A storable entity with a place in the key layout.
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Prefix for per-record keys, e.g. `workspace` in `workspace_<id>`.
    const KEY_PREFIX: &'static str;
    /// Index the record's id is published in.
    const INDEX: &'static str;

    /// The id as stored in the index.
    fn record_id(&self) -> &str;
}

impl Record for Workspace {
    const KEY_PREFIX: &'static str = "workspace";
    const INDEX: &'static str = WORKSPACE_INDEX;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

impl Record for Booking {
    const KEY_PREFIX: &'static str = "booking";
    const INDEX: &'static str = BOOKING_INDEX;

    fn record_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Ledger key holding one record: `<prefix>_<id>`.
pub fn record_key<R: Record>(id: &str) -> String {
    format!("{}_{id}", R::KEY_PREFIX)
}

/// Ledger key holding an account's canonical preference envelope.
pub fn preferences_key(account: &AccountId) -> String {
    format!("{PREFERENCES_PREFIX}_{account}")
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
