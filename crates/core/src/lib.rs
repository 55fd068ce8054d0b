// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hush-core: record types and protocol primitives for hushdesk

pub mod macros;

pub mod account;
pub mod booking;
pub mod clock;
pub mod envelope;
pub mod id;
pub mod preferences;
pub mod workspace;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use account::AccountId;
#[cfg(any(test, feature = "test-support"))]
pub use booking::BookingBuilder;
pub use booking::{Booking, BookingId, BookingStatus};
pub use clock::{Clock, FakeClock, SystemClock};
pub use envelope::{EncryptedEnvelope, EnvelopeError, TAG_SEPARATOR};
#[cfg(any(test, feature = "test-support"))]
pub use preferences::UserPreferencesBuilder;
pub use preferences::{
    MatchCriteria, PreferenceRangeError, UserPreferences, NOISE_LEVEL_RANGE, PRIVACY_LEVEL_RANGE,
};
#[cfg(any(test, feature = "test-support"))]
pub use workspace::WorkspaceBuilder;
pub use workspace::{Workspace, WorkspaceId, WorkspaceStatus};
