// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger client contract.

use async_trait::async_trait;

/// Receipt for an acknowledged write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxReceipt {
    pub tx_id: String,
}

impl TxReceipt {
    pub fn new() -> Self {
        Self {
            tx_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

impl Default for TxReceipt {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TxReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.tx_id)
    }
}

/// Key/value access to the external ledger.
///
/// `set` replaces the whole value under a key; there is no compare-and-swap.
/// Anything needing read-modify-write safety has to build it above this
/// trait (see the key registry).
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Whether the ledger currently accepts calls.
    async fn available(&self) -> bool;

    /// Read the value stored under `key`. Missing keys are `None`, not an
    /// error.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: Vec<u8>) -> Result<TxReceipt, LedgerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger unavailable")]
    Unavailable,
    #[error("transaction rejected by user")]
    UserRejected,
    #[error("transaction failed: {0}")]
    TransactionFailed(String),
    #[error("invalid record key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },
    #[error("ledger directory locked by another process: {0}")]
    Locked(#[source] std::io::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
