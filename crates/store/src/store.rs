// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed record persistence over the shared ledger.
//!
//! A [`RecordStore`] owns the key layout: each record lands under
//! `<prefix>_<id>` and its id is published to the type's index through the
//! [`KeyRegistry`]. The record bytes are always written before the id is
//! published, so a reader walking the index never sees an id with no
//! backing record. The inverse can happen (a crash between the two writes
//! leaves an unlisted record); `save` is idempotent, so retrying repairs it.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use hush_core::{AccountId, EncryptedEnvelope};
use hush_ledger::Ledger;

use crate::codec;
use crate::error::StoreError;
use crate::keys::{preferences_key, record_key, Record};
use crate::registry::KeyRegistry;

/// How many record fetches `load_all` keeps in flight.
const FETCH_CONCURRENCY: usize = 8;

#[derive(Clone)]
pub struct RecordStore {
    ledger: Arc<dyn Ledger>,
    registry: KeyRegistry,
}

impl RecordStore {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        let registry = KeyRegistry::new(ledger.clone());
        Self { ledger, registry }
    }

    /// Builds a store sharing an existing registry (and its writer tasks).
    pub fn with_registry(ledger: Arc<dyn Ledger>, registry: KeyRegistry) -> Self {
        Self { ledger, registry }
    }

    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// Fails fast when the ledger reports itself unreachable.
    pub async fn ensure_available(&self) -> Result<(), StoreError> {
        if self.ledger.available().await {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }

    /// Persists `record` and publishes its id to the type's index.
    pub async fn save<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        self.ensure_available().await?;
        let key = record_key::<R>(record.record_id());
        let bytes = codec::encode(record)?;
        // Record first, index second: write-before-publish.
        let receipt = self.ledger.set(&key, bytes).await?;
        tracing::debug!(key = %key, tx = %receipt, "record written");
        self.registry.append(R::INDEX, record.record_id()).await
    }

    /// Loads one record by id.
    ///
    /// Missing and undecodable both come back as [`StoreError::NotFound`];
    /// the undecodable case is logged on the way out.
    pub async fn load<R: Record>(&self, id: &str) -> Result<R, StoreError> {
        self.ensure_available().await?;
        let key = record_key::<R>(id);
        let bytes = match self.ledger.get(&key).await? {
            Some(bytes) => bytes,
            None => return Err(StoreError::NotFound { key }),
        };
        match codec::decode(&bytes) {
            Ok(record) => Ok(record),
            Err(error) => {
                tracing::warn!(key = %key, error = %error, "undecodable record treated as missing");
                Err(StoreError::NotFound { key })
            }
        }
    }

    /// Loads every record listed in the type's index, in index order.
    ///
    /// Ids that fail to fetch or decode are logged and skipped; one bad
    /// entry never sinks the rest of the listing.
    pub async fn load_all<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        self.ensure_available().await?;
        let ids = self.registry.list_all(R::INDEX).await?;
        let results: Vec<_> = stream::iter(&ids)
            .map(|id| self.load::<R>(id))
            .buffered(FETCH_CONCURRENCY)
            .collect()
            .await;

        let mut records = Vec::with_capacity(results.len());
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(record) => records.push(record),
                Err(error) => {
                    tracing::warn!(index = R::INDEX, id = %id, error = %error, "skipping unloadable record");
                }
            }
        }
        Ok(records)
    }

    /// Writes the canonical encrypted preference record for `account`.
    ///
    /// Preference records live under a per-account key and carry no index
    /// entry; saving again overwrites.
    pub async fn save_preferences(
        &self,
        account: &AccountId,
        envelope: &EncryptedEnvelope,
    ) -> Result<(), StoreError> {
        self.ensure_available().await?;
        let key = preferences_key(account);
        let bytes = codec::encode(envelope)?;
        self.ledger.set(&key, bytes).await?;
        Ok(())
    }

    /// Reads the canonical encrypted preference record for `account`.
    ///
    /// Missing is `Ok(None)`. Undecodable is an error: unlike plain
    /// records, the confidential payload never degrades silently.
    pub async fn load_preferences(
        &self,
        account: &AccountId,
    ) -> Result<Option<EncryptedEnvelope>, StoreError> {
        self.ensure_available().await?;
        let key = preferences_key(account);
        match self.ledger.get(&key).await? {
            None => Ok(None),
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
