// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hush-store: typed records and index lists over the raw ledger.
//!
//! The ledger gives us per-key atomic byte writes and nothing else.
//! This crate layers on record encoding ([`codec`]), the shared key
//! layout ([`keys`]), lost-update-safe index maintenance
//! ([`KeyRegistry`]), and typed record access ([`RecordStore`]).

pub mod codec;
pub mod error;
pub mod keys;
pub mod registry;
pub mod store;

pub use codec::CodecError;
pub use error::StoreError;
pub use keys::{Record, BOOKING_INDEX, WORKSPACE_INDEX};
pub use registry::{KeyRegistry, VerifyPolicy};
pub use store::RecordStore;
