// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Booking records.

use crate::account::AccountId;
use crate::workspace::WorkspaceId;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a booking.
    pub struct BookingId("bkg-");
}

/// Bookings are never deleted; cancellation is the only mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

crate::simple_display! {
    BookingStatus {
        Confirmed => "confirmed",
        Cancelled => "cancelled",
    }
}

/// One account holding one workspace for a number of whole hours.
///
/// At most one `Confirmed` booking may exist per workspace at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub workspace_id: WorkspaceId,
    pub user_id: AccountId,
    /// Whole hours, at least 1.
    pub duration_hours: u32,
    /// `price_per_hour * duration_hours`, in minor currency units.
    pub total_cost: u64,
    pub created_at_ms: u64,
    pub status: BookingStatus,
}

impl Booking {
    /// Cost of holding a workspace at `price_per_hour` for
    /// `duration_hours`, or `None` on overflow.
    pub fn total_cost_for(price_per_hour: u64, duration_hours: u32) -> Option<u64> {
        price_per_hour.checked_mul(u64::from(duration_hours))
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
    }
}

crate::builder! {
    pub struct BookingBuilder => Booking {
        into {
            id: BookingId = BookingId::new(),
            workspace_id: WorkspaceId = WorkspaceId::new(),
            user_id: AccountId = "acct-test",
        }
        set {
            duration_hours: u32 = 3,
            total_cost: u64 = 30,
            created_at_ms: u64 = 1_000_000,
            status: BookingStatus = BookingStatus::Confirmed,
        }
    }
}

#[cfg(test)]
#[path = "booking_tests.rs"]
mod tests;
