// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem-backed ledger.
//!
//! One file per record key under a root directory. Writes go through a
//! temp file plus rename so a reader never observes a partial value.
//! An exclusive advisory lock on `<root>/.lock` keeps two processes
//! from sharing a root.

use std::path::PathBuf;

use async_trait::async_trait;
use fs2::FileExt;

use crate::client::{Ledger, LedgerError, TxReceipt};

#[derive(Debug)]
pub struct FileLedger {
    root: PathBuf,
    // Held for the lifetime of the ledger; the advisory lock releases on drop.
    _lock: std::fs::File,
}

impl FileLedger {
    /// Open (creating if needed) a ledger root and take its lock.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;

        // Avoid truncating before we hold the lock; the file may belong
        // to a live ledger.
        let lock = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(root.join(".lock"))?;
        lock.try_lock_exclusive().map_err(LedgerError::Locked)?;

        tracing::debug!(root = %root.display(), "ledger root opened");
        Ok(Self { root, _lock: lock })
    }

    fn record_path(&self, key: &str) -> Result<PathBuf, LedgerError> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

/// Record keys become file names, so the charset is restricted to make
/// path traversal unrepresentable. Dots are excluded to keep `.lock`
/// and `*.tmp` out of the key space.
fn validate_key(key: &str) -> Result<(), LedgerError> {
    if key.is_empty() {
        return Err(LedgerError::InvalidKey {
            key: key.to_string(),
            reason: "empty",
        });
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(LedgerError::InvalidKey {
            key: key.to_string(),
            reason: "allowed characters are [A-Za-z0-9_-]",
        });
    }
    Ok(())
}

#[async_trait]
impl Ledger for FileLedger {
    async fn available(&self) -> bool {
        tokio::fs::metadata(&self.root).await.is_ok()
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let path = self.record_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<TxReceipt, LedgerError> {
        let path = self.record_path(key)?;
        let tmp = self.root.join(format!("{key}.tmp"));
        tokio::fs::write(&tmp, &value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(TxReceipt::new())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
