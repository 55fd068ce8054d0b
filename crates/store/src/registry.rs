// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named index lists over the ledger.
//!
//! One ledger key per index holds a JSON array of record ids. The
//! ledger offers no compare-and-swap, so a blind read-modify-write
//! loses updates when two writers interleave. Two layers defend
//! against that:
//!
//! - every append from this process to a given index funnels through
//!   that index's single writer task, so in-process writers cannot
//!   interleave at all;
//! - after writing, the writer re-reads the index and retries with
//!   exponential backoff while its id is missing, which recovers from
//!   overwrites by clients outside this process.
//!
//! An id already present at any point counts as success no matter who
//! wrote it, so `append` is idempotent under retries.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexSet;
use parking_lot::Mutex;
use smol_str::SmolStr;
use tokio::sync::{mpsc, oneshot};

use hush_ledger::Ledger;

use crate::codec;
use crate::error::StoreError;

/// Bounds for the post-write verification loop.
#[derive(Debug, Clone, Copy)]
pub struct VerifyPolicy {
    /// Total write attempts before giving up with `RegistryConflict`.
    pub attempts: u32,
    /// Backoff before the second attempt; doubles each retry.
    pub backoff: Duration,
}

impl Default for VerifyPolicy {
    fn default() -> Self {
        Self {
            attempts: 4,
            backoff: Duration::from_millis(25),
        }
    }
}

enum Command {
    Append {
        id: SmolStr,
        reply: oneshot::Sender<Result<(), StoreError>>,
    },
}

/// Handle to the per-index writer tasks. Cheap to clone; clones share
/// the writers.
#[derive(Clone)]
pub struct KeyRegistry {
    ledger: Arc<dyn Ledger>,
    writers: Arc<Mutex<HashMap<String, mpsc::Sender<Command>>>>,
    policy: VerifyPolicy,
}

impl KeyRegistry {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self::with_policy(ledger, VerifyPolicy::default())
    }

    pub fn with_policy(ledger: Arc<dyn Ledger>, policy: VerifyPolicy) -> Self {
        Self {
            ledger,
            writers: Arc::new(Mutex::new(HashMap::new())),
            policy,
        }
    }

    /// Read an index in stored order. Missing key or undecodable payload
    /// is an empty list, not an error.
    pub async fn list_all(&self, index: &str) -> Result<Vec<SmolStr>, StoreError> {
        Ok(read_ids(self.ledger.as_ref(), index)
            .await?
            .into_iter()
            .collect())
    }

    /// Publish `id` in `index`.
    ///
    /// Serialized against other in-process appends to the same index and
    /// verified against outside overwrites. Returns `RegistryConflict`
    /// once the verify budget is exhausted.
    pub async fn append(&self, index: &str, id: &str) -> Result<(), StoreError> {
        let writer = self.writer(index);
        let (reply_tx, reply_rx) = oneshot::channel();
        writer
            .send(Command::Append {
                id: SmolStr::new(id),
                reply: reply_tx,
            })
            .await
            .map_err(|_| StoreError::Unavailable)?;
        reply_rx.await.map_err(|_| StoreError::Unavailable)?
    }

    /// Look up the index's writer, spawning it on first use.
    fn writer(&self, index: &str) -> mpsc::Sender<Command> {
        let mut writers = self.writers.lock();
        if let Some(tx) = writers.get(index) {
            if !tx.is_closed() {
                return tx.clone();
            }
        }
        let (tx, rx) = mpsc::channel(32);
        let task = WriterTask {
            ledger: Arc::clone(&self.ledger),
            index: index.to_string(),
            policy: self.policy,
        };
        tokio::spawn(task.run(rx));
        writers.insert(index.to_string(), tx.clone());
        tx
    }
}

/// Owns all mutations of one index key.
struct WriterTask {
    ledger: Arc<dyn Ledger>,
    index: String,
    policy: VerifyPolicy,
}

impl WriterTask {
    async fn run(self, mut rx: mpsc::Receiver<Command>) {
        while let Some(command) = rx.recv().await {
            match command {
                Command::Append { id, reply } => {
                    let _ = reply.send(self.append(&id).await);
                }
            }
        }
    }

    async fn append(&self, id: &str) -> Result<(), StoreError> {
        let mut backoff = self.policy.backoff;
        for attempt in 1..=self.policy.attempts {
            let mut ids = read_ids(self.ledger.as_ref(), &self.index).await?;
            if !ids.insert(SmolStr::new(id)) {
                return Ok(());
            }
            let bytes = codec::encode_index(&ids)?;
            self.ledger.set(&self.index, bytes).await?;

            let after = read_ids(self.ledger.as_ref(), &self.index).await?;
            if after.contains(id) {
                return Ok(());
            }
            tracing::warn!(
                index = %self.index,
                id,
                attempt,
                "index overwritten during append, retrying"
            );
            if attempt < self.policy.attempts {
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
        }
        Err(StoreError::RegistryConflict {
            index: self.index.clone(),
            id: id.to_string(),
            attempts: self.policy.attempts,
        })
    }
}

async fn read_ids(ledger: &dyn Ledger, index: &str) -> Result<IndexSet<SmolStr>, StoreError> {
    match ledger.get(index).await? {
        None => Ok(IndexSet::new()),
        Some(bytes) => match codec::decode_index(&bytes) {
            Ok(ids) => Ok(ids),
            Err(e) => {
                tracing::warn!(index, error = %e, "undecodable index treated as empty");
                Ok(IndexSet::new())
            }
        },
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
