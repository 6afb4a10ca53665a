//! Check-in recording.
//!
//! A scan yields a guest token and a target workshop. The recorder resolves both,
//! applies the VIP and capacity rules, and writes at most one attendance row.
//! Repeat scans of a checked-in guest are a successful no-op, never an error.

use chrono::{DateTime, Utc};
use db::models::{attendance, guest, workshop};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Serialize;

use crate::error::{AppError, is_unique_violation};
use crate::vip_access_service::VipAccessService;

/// Result of an accepted scan.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckInOutcome {
    /// A new attendance row was written.
    CheckedIn(attendance::Model),
    /// The guest was already checked in; carries the existing row.
    AlreadyCheckedIn(attendance::Model),
}

/// Feedback tone the scanning station should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Success,
    Error,
}

impl CheckInOutcome {
    pub fn code(&self) -> &'static str {
        match self {
            CheckInOutcome::CheckedIn(_) => "CHECKED_IN",
            CheckInOutcome::AlreadyCheckedIn(_) => "ALREADY_CHECKED_IN",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CheckInOutcome::CheckedIn(_) => "Guest checked in",
            CheckInOutcome::AlreadyCheckedIn(_) => "Guest already checked in",
        }
    }

    pub fn attendance(&self) -> &attendance::Model {
        match self {
            CheckInOutcome::CheckedIn(row) | CheckInOutcome::AlreadyCheckedIn(row) => row,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, CheckInOutcome::CheckedIn(_))
    }

    pub fn signal(&self) -> Signal {
        Signal::Success
    }
}

pub struct AttendanceRecorder {
    db: DatabaseConnection,
    gatekeeper: VipAccessService,
}

/// Writes the attendance row on `conn`. If the (guest, workshop) pair already exists
/// the unique index rejects the insert and the stored row is read back on the same
/// connection, so a lost race reports `AlreadyCheckedIn`.
pub(crate) async fn insert_or_existing<C: ConnectionTrait>(
    conn: &C,
    guest_id: i64,
    workshop_id: i64,
    actor_id: i64,
    now: DateTime<Utc>,
) -> Result<CheckInOutcome, AppError> {
    match attendance::Model::insert(conn, guest_id, workshop_id, Some(actor_id), now).await {
        Ok(row) => Ok(CheckInOutcome::CheckedIn(row)),
        Err(err) if is_unique_violation(&err) => {
            tracing::info!(guest_id, workshop_id, "Concurrent scan already recorded this check-in");
            match attendance::Model::find_for(conn, guest_id, workshop_id).await? {
                Some(existing) => Ok(CheckInOutcome::AlreadyCheckedIn(existing)),
                None => Err(AppError::Database(err)),
            }
        }
        Err(err) => {
            tracing::error!(error = %err, guest_id, workshop_id, "Failed to record check-in");
            Err(AppError::Database(err))
        }
    }
}

impl AttendanceRecorder {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            gatekeeper: VipAccessService::new(db.clone()),
            db,
        }
    }

    pub async fn record_check_in(
        &self,
        guest_token: &str,
        workshop_id: i64,
        actor_id: i64,
    ) -> Result<CheckInOutcome, AppError> {
        self.record_check_in_at(guest_token, workshop_id, actor_id, Utc::now())
            .await
    }

    /// Same as [`record_check_in`](Self::record_check_in) with an explicit timestamp.
    pub async fn record_check_in_at(
        &self,
        guest_token: &str,
        workshop_id: i64,
        actor_id: i64,
        now: DateTime<Utc>,
    ) -> Result<CheckInOutcome, AppError> {
        let guest_id = guest::parse_qr_code(guest_token.trim()).ok_or_else(|| {
            tracing::info!(token = guest_token, workshop_id, "Rejected malformed guest token");
            AppError::InvalidTokenFormat
        })?;

        let guest = guest::Model::find_by_qr_code(&self.db, &guest::qr_code_for(guest_id))
            .await?
            .ok_or(AppError::GuestNotFound)?;

        let workshop = workshop::Entity::find_by_id(workshop_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::SessionNotFound)?;

        // The per-session grant is the only VIP authority; Guest::is_vip is display-only.
        if workshop.is_vip && !self.gatekeeper.has_vip_access(guest.id, workshop.id).await? {
            tracing::warn!(
                guest_id = guest.id,
                workshop_id,
                actor_id,
                "VIP check-in denied: no grant"
            );
            return Err(AppError::VipAccessDenied);
        }

        let txn = self.db.begin().await?;

        if let Some(existing) = attendance::Model::find_for(&txn, guest.id, workshop.id).await? {
            txn.rollback().await?;
            tracing::info!(guest_id = guest.id, workshop_id, "Guest already checked in");
            return Ok(CheckInOutcome::AlreadyCheckedIn(existing));
        }

        if let Some(capacity) = workshop.max_capacity {
            let taken = attendance::Model::count_for_workshop(&txn, workshop.id).await?;
            if taken >= capacity.max(0) as u64 {
                txn.rollback().await?;
                tracing::warn!(workshop_id, capacity, "Check-in rejected: session full");
                return Err(AppError::CapacityExceeded);
            }
        }

        let outcome = insert_or_existing(&txn, guest.id, workshop.id, actor_id, now).await;
        match outcome {
            Ok(CheckInOutcome::CheckedIn(row)) => {
                txn.commit().await?;
                tracing::info!(
                    attendance_id = row.id,
                    guest_id = guest.id,
                    workshop_id,
                    actor_id,
                    "Guest checked in"
                );
                Ok(CheckInOutcome::CheckedIn(row))
            }
            other => {
                txn.rollback().await?;
                other
            }
        }
    }

    /// Removes a check-in, e.g. to correct a mis-scan.
    pub async fn remove_attendance(&self, attendance_id: i64) -> Result<(), AppError> {
        if attendance::Model::delete_by_id(&self.db, attendance_id).await? {
            tracing::info!(attendance_id, "Attendance record removed");
            Ok(())
        } else {
            Err(AppError::AttendanceNotFound)
        }
    }
}
