// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hush-ledger: the append-only key/value service under the record store.
//!
//! The real ledger lives outside this process; everything here is either
//! the client contract ([`Ledger`]) or a local stand-in behind it. Calls
//! are individually atomic, multi-key sequences are not, and other
//! clients may write between any two of ours.

pub mod client;
pub mod config;
pub mod file;
pub mod memory;

pub use client::{Ledger, LedgerError, TxReceipt};
pub use config::{data_dir, ConfigError, LedgerConfig};
pub use file::FileLedger;
pub use memory::MemoryLedger;
