// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store-level error taxonomy.

use crate::codec::CodecError;
use hush_ledger::LedgerError;

/// Every variant is distinguishable by the caller; decode damage is
/// isolated per record and never collapses an aggregate read.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The ledger liveness probe failed; fatal for the session.
    #[error("ledger unavailable")]
    Unavailable,
    /// Missing or unreadable record on a direct lookup.
    #[error("record {key} not found")]
    NotFound { key: String },
    /// An index append kept losing to concurrent writers.
    #[error("registry {index} rejected id {id} after {attempts} attempts")]
    RegistryConflict {
        index: String,
        id: String,
        attempts: u32,
    },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl StoreError {
    /// True when retrying the whole operation may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StoreError::RegistryConflict { .. } | StoreError::Unavailable
        )
    }
}
