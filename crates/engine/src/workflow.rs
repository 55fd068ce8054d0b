// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The booking state machine over store, cipher, and clock.
//!
//! The ledger offers no multi-key transaction, so `book` and `cancel`
//! order their writes to keep every observable intermediate state safe,
//! and surface the one unsafe gap ([`BookingError::PartialBooking`])
//! instead of papering over it.

use hush_core::{
    AccountId, Booking, BookingId, BookingStatus, Clock, EncryptedEnvelope, Workspace, WorkspaceId,
    WorkspaceStatus,
};
use hush_store::{RecordStore, StoreError};

use crate::matching::{MatchError, MatchingEngine};

/// One attempt to hold a workspace for a number of whole hours.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub workspace_id: WorkspaceId,
    pub user: AccountId,
    pub duration_hours: u32,
    /// The user's encrypted preferences; stored canonically per account
    /// and snapshotted onto the workspace on success.
    pub envelope: EncryptedEnvelope,
}

pub struct BookingWorkflow<C: Clock> {
    store: RecordStore,
    matcher: MatchingEngine,
    clock: C,
}

impl<C: Clock> BookingWorkflow<C> {
    pub fn new(store: RecordStore, matcher: MatchingEngine, clock: C) -> Self {
        Self {
            store,
            matcher,
            clock,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Books a workspace for `request.user`.
    ///
    /// Write order: canonical preference envelope, booking record,
    /// workspace transition. The workspace write going last means a
    /// half-applied attempt leaves the workspace still `Available`; that
    /// one inconsistency is reported as [`BookingError::PartialBooking`]
    /// so the caller re-queries instead of assuming success.
    pub async fn book(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        let BookingRequest {
            workspace_id,
            user,
            duration_hours,
            envelope,
        } = request;

        let mut workspace = match self.store.load::<Workspace>(workspace_id.as_str()).await {
            Ok(workspace) => workspace,
            Err(StoreError::NotFound { .. }) => {
                return Err(BookingError::NotFound { workspace_id })
            }
            Err(err) => return Err(err.into()),
        };

        // First booker wins; no retry, no queueing.
        if !workspace.is_available() {
            return Err(BookingError::Conflict {
                workspace_id,
                expected: WorkspaceStatus::Available,
                actual: workspace.status,
            });
        }

        if !self.matcher.eligibility(&workspace, &envelope)? {
            return Err(BookingError::NotEligible { workspace_id });
        }

        if duration_hours == 0 {
            return Err(BookingError::InvalidDuration);
        }
        let total_cost = Booking::total_cost_for(workspace.price_per_hour, duration_hours)
            .ok_or(BookingError::CostOverflow {
                price_per_hour: workspace.price_per_hour,
                duration_hours,
            })?;
        let booking = Booking {
            id: BookingId::new(),
            workspace_id: workspace.id.clone(),
            user_id: user.clone(),
            duration_hours,
            total_cost,
            created_at_ms: self.clock.epoch_ms(),
            status: BookingStatus::Confirmed,
        };

        // Canonical envelope first; a failure here aborts with nothing
        // else written.
        self.store.save_preferences(&user, &envelope).await?;

        self.store.save(&booking).await?;

        workspace.book(user, envelope, booking.created_at_ms);
        if let Err(source) = self.store.save(&workspace).await {
            tracing::warn!(
                workspace = %workspace.id,
                booking = %booking.id,
                error = %source,
                retryable = source.is_retryable(),
                "booking recorded but workspace update failed"
            );
            return Err(BookingError::PartialBooking {
                booking_id: booking.id.clone(),
                workspace_id: workspace.id.clone(),
                source,
            });
        }

        tracing::info!(
            workspace = %workspace.id,
            booking = %booking.id,
            user = %booking.user_id,
            total_cost = booking.total_cost,
            "workspace booked"
        );
        Ok(booking)
    }

    /// Cancels the active booking on `workspace_id`, owner only.
    ///
    /// The booking is retired before the workspace is released, so a
    /// concurrent booker can never acquire a workspace whose previous
    /// booking is still `Confirmed`.
    pub async fn cancel(
        &self,
        workspace_id: &WorkspaceId,
        by: &AccountId,
    ) -> Result<(), BookingError> {
        let mut workspace = match self.store.load::<Workspace>(workspace_id.as_str()).await {
            Ok(workspace) => workspace,
            Err(StoreError::NotFound { .. }) => {
                return Err(BookingError::NotFound {
                    workspace_id: workspace_id.clone(),
                })
            }
            Err(err) => return Err(err.into()),
        };

        if workspace.status != WorkspaceStatus::Booked {
            return Err(BookingError::Conflict {
                workspace_id: workspace_id.clone(),
                expected: WorkspaceStatus::Booked,
                actual: workspace.status,
            });
        }
        if workspace.owner.as_ref() != Some(by) {
            return Err(BookingError::NotOwner {
                workspace_id: workspace_id.clone(),
            });
        }

        let active = self
            .store
            .load_all::<Booking>()
            .await?
            .into_iter()
            .find(|booking| booking.workspace_id == *workspace_id && booking.is_active());
        let cancelled = match active {
            Some(mut booking) => {
                booking.cancel();
                self.store.save(&booking).await?;
                Some(booking.id)
            }
            None => {
                // State already inconsistent; releasing the workspace
                // below repairs what this layer can.
                tracing::warn!(
                    workspace = %workspace_id,
                    "booked workspace has no active booking"
                );
                None
            }
        };

        workspace.release();
        if let Err(source) = self.store.save(&workspace).await {
            if let Some(booking_id) = cancelled {
                tracing::warn!(
                    workspace = %workspace_id,
                    booking = %booking_id,
                    error = %source,
                    retryable = source.is_retryable(),
                    "booking cancelled but workspace still booked"
                );
                return Err(BookingError::PartialBooking {
                    booking_id,
                    workspace_id: workspace_id.clone(),
                    source,
                });
            }
            return Err(source.into());
        }

        tracing::info!(workspace = %workspace_id, user = %by, "booking cancelled");
        Ok(())
    }

    /// Workspaces currently open for booking.
    pub async fn available_workspaces(&self) -> Result<Vec<Workspace>, BookingError> {
        let mut workspaces = self.store.load_all::<Workspace>().await?;
        workspaces.retain(Workspace::is_available);
        Ok(workspaces)
    }

    /// Available workspaces the encrypted preferences fit.
    pub async fn matching_workspaces(
        &self,
        envelope: &EncryptedEnvelope,
    ) -> Result<Vec<Workspace>, BookingError> {
        let available = self.available_workspaces().await?;
        Ok(self.matcher.shortlist(&available, envelope))
    }

    /// All workspaces, most recently booked first; never-booked trail.
    pub async fn workspaces_by_recency(&self) -> Result<Vec<Workspace>, BookingError> {
        let mut workspaces = self.store.load_all::<Workspace>().await?;
        workspaces.sort_by(|a, b| b.booked_at_ms.cmp(&a.booked_at_ms));
        Ok(workspaces)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("workspace {workspace_id} not found")]
    NotFound { workspace_id: WorkspaceId },
    #[error("workspace {workspace_id} is {actual}, expected {expected}")]
    Conflict {
        workspace_id: WorkspaceId,
        expected: WorkspaceStatus,
        actual: WorkspaceStatus,
    },
    #[error("workspace {workspace_id} is held by another account")]
    NotOwner { workspace_id: WorkspaceId },
    #[error("preferences do not match workspace {workspace_id}")]
    NotEligible { workspace_id: WorkspaceId },
    #[error("booking duration must be at least one hour")]
    InvalidDuration,
    #[error("cost overflows at {price_per_hour} per hour over {duration_hours}h")]
    CostOverflow {
        price_per_hour: u64,
        duration_hours: u32,
    },
    /// The booking write landed but the workspace write did not; the two
    /// records disagree until a retry or cancel repairs them.
    #[error("booking {booking_id} recorded but workspace {workspace_id} not updated: {source}")]
    PartialBooking {
        booking_id: BookingId,
        workspace_id: WorkspaceId,
        source: StoreError,
    },
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
