// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory ledger for tests and local development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::client::{Ledger, LedgerError, TxReceipt};

/// Shared-memory [`Ledger`] with fault injection.
///
/// Clones share state, so a test can hold one handle for injection and
/// inspection while the system under test holds another.
#[derive(Clone, Default)]
pub struct MemoryLedger {
    inner: Arc<Inner>,
}

struct Inner {
    records: Mutex<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    faults: Mutex<Vec<SetFault>>,
    set_count: AtomicU64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
            faults: Mutex::new(Vec::new()),
            set_count: AtomicU64::new(0),
        }
    }
}

/// A scripted write failure, armed for `remaining` matching writes.
struct SetFault {
    prefix: String,
    remaining: u32,
    kind: FaultKind,
}

#[derive(Clone, Copy)]
enum FaultKind {
    Reject,
    Fail,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle availability; while off, every call errors `Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.inner.available.store(available, Ordering::SeqCst);
    }

    /// Make the next `n` writes fail with `UserRejected`.
    pub fn reject_next_sets(&self, n: u32) {
        self.reject_sets_matching("", n);
    }

    /// Make the next `n` writes to keys starting with `prefix` fail with
    /// `UserRejected`. Writes to other keys pass through untouched.
    pub fn reject_sets_matching(&self, prefix: &str, n: u32) {
        self.push_fault(prefix, n, FaultKind::Reject);
    }

    /// Make the next `n` writes to keys starting with `prefix` fail with
    /// `TransactionFailed`.
    pub fn fail_sets_matching(&self, prefix: &str, n: u32) {
        self.push_fault(prefix, n, FaultKind::Fail);
    }

    /// Number of acknowledged writes so far.
    pub fn set_count(&self) -> u64 {
        self.inner.set_count.load(Ordering::SeqCst)
    }

    /// Write bytes directly, bypassing availability and rejection hooks.
    /// Stands in for another ledger client touching the same keys.
    pub fn insert_raw(&self, key: impl Into<String>, value: Vec<u8>) {
        self.inner.records.lock().insert(key.into(), value);
    }

    /// Read bytes directly, bypassing availability hooks.
    pub fn get_raw(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.records.lock().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.records.lock().contains_key(key)
    }

    fn check_available(&self) -> Result<(), LedgerError> {
        if self.inner.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(LedgerError::Unavailable)
        }
    }

    fn push_fault(&self, prefix: &str, n: u32, kind: FaultKind) {
        if n == 0 {
            return;
        }
        self.inner.faults.lock().push(SetFault {
            prefix: prefix.to_string(),
            remaining: n,
            kind,
        });
    }

    /// Consumes one armed fault matching `key`, if any.
    fn take_fault(&self, key: &str) -> Option<FaultKind> {
        let mut faults = self.inner.faults.lock();
        let slot = faults
            .iter_mut()
            .find(|fault| fault.remaining > 0 && key.starts_with(&fault.prefix))?;
        slot.remaining -= 1;
        let kind = slot.kind;
        faults.retain(|fault| fault.remaining > 0);
        Some(kind)
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    async fn available(&self) -> bool {
        self.inner.available.load(Ordering::SeqCst)
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        self.check_available()?;
        Ok(self.inner.records.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<TxReceipt, LedgerError> {
        self.check_available()?;
        match self.take_fault(key) {
            Some(FaultKind::Reject) => return Err(LedgerError::UserRejected),
            Some(FaultKind::Fail) => {
                return Err(LedgerError::TransactionFailed(format!(
                    "scripted fault for key {key}"
                )))
            }
            None => {}
        }
        self.inner.records.lock().insert(key.to_string(), value);
        self.inner.set_count.fetch_add(1, Ordering::SeqCst);
        Ok(TxReceipt::new())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
