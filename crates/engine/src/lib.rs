// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hush-engine: the booking workflow and preference matching.
//!
//! Everything stateful lives below this crate (records in
//! [`hush_store`], encryption in [`hush_cipher`]); this crate owns the
//! ordering and precondition rules that keep concurrent bookers from
//! corrupting shared ledger state.

pub mod matching;
pub mod workflow;

pub use matching::{MatchError, MatchingEngine};
pub use workflow::{BookingError, BookingRequest, BookingWorkflow};
