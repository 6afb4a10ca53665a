//! Attendance percentages, certificate eligibility and dashboard figures.
//!
//! Everything here is read-only and recomputed on every call. Unknown ids are not
//! errors: they yield zero, `false` or an empty list.
//!
//! Percentages are scoped to a single owner. A guest's percentage counts only the
//! workshops owned by the guest's owner; a workshop's percentage counts only the
//! guests owned by the workshop's owner.

use chrono::{DateTime, Utc};
use db::models::{attendance, guest, workshop};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;

use crate::error::AppError;

/// Minimum guest attendance percentage for a certificate, inclusive.
pub const CERTIFICATE_THRESHOLD: u64 = 70;

/// Share of `part` in `whole` as a percentage; `0.0` when `whole` is zero.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 100.0) / whole as f64
}

/// Integer form of `percentage >= CERTIFICATE_THRESHOLD`, free of float rounding.
pub fn meets_threshold(part: u64, whole: u64) -> bool {
    whole > 0 && part * 100 >= whole * CERTIFICATE_THRESHOLD
}

#[derive(Debug, Clone, Serialize)]
pub struct GuestReport {
    pub guest_id: i64,
    pub attended: u64,
    pub total_workshops: u64,
    pub attendance_percentage: f64,
    pub eligible_for_certificate: bool,
    pub has_attended_any: bool,
    pub check_ins: Vec<attendance::CheckInWithNames>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkshopReport {
    pub workshop_id: i64,
    pub attendees: u64,
    pub total_guests: u64,
    pub attendance_percentage: f64,
    pub max_capacity: Option<i32>,
    pub remaining_capacity: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSummary {
    pub total_workshops: u64,
    pub vip_workshops: u64,
    pub total_guests: u64,
    pub total_check_ins: u64,
    pub average_attendance_percentage: f64,
    pub eligible_guests: u64,
}

/// Data handed to whatever renders the certificate document.
#[derive(Debug, Clone, Serialize)]
pub struct Certificate {
    pub guest_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub attended: u64,
    pub total_workshops: u64,
    pub attendance_percentage: f64,
    pub workshops: Vec<String>,
    pub issued_at: DateTime<Utc>,
}

pub struct AnalyticsService {
    db: DatabaseConnection,
}

impl AnalyticsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// (attended, total) for the guest within its owner's workshops.
    async fn guest_counts(&self, guest_id: i64) -> Result<Option<(guest::Model, u64, u64)>, AppError> {
        let Some(guest) = guest::Entity::find_by_id(guest_id).one(&self.db).await? else {
            return Ok(None);
        };
        let total = workshop::Model::count_for_owner(&self.db, guest.owner_id).await?;
        let attended =
            attendance::Model::count_for_guest_in_owner_scope(&self.db, guest.id, guest.owner_id)
                .await?;
        Ok(Some((guest, attended, total)))
    }

    pub async fn guest_attendance_percentage(&self, guest_id: i64) -> Result<f64, AppError> {
        Ok(match self.guest_counts(guest_id).await? {
            Some((_, attended, total)) => percentage(attended, total),
            None => 0.0,
        })
    }

    pub async fn session_attendance_percentage(&self, workshop_id: i64) -> Result<f64, AppError> {
        let Some(workshop) = workshop::Entity::find_by_id(workshop_id).one(&self.db).await? else {
            return Ok(0.0);
        };
        let guests = guest::Model::count_for_owner(&self.db, workshop.owner_id).await?;
        let attendees = attendance::Model::count_for_workshop_in_owner_scope(
            &self.db,
            workshop.id,
            workshop.owner_id,
        )
        .await?;
        Ok(percentage(attendees, guests))
    }

    pub async fn is_eligible_for_certificate(&self, guest_id: i64) -> Result<bool, AppError> {
        Ok(match self.guest_counts(guest_id).await? {
            Some((_, attended, total)) => meets_threshold(attended, total),
            None => false,
        })
    }

    pub async fn has_attended_any(&self, guest_id: i64) -> Result<bool, AppError> {
        Ok(attendance::Model::count_for_guest(&self.db, guest_id).await? > 0)
    }

    /// The `limit` newest check-ins, newest first.
    pub async fn recent_check_ins(
        &self,
        limit: u64,
    ) -> Result<Vec<attendance::CheckInWithNames>, AppError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        Ok(attendance::Model::recent(&self.db, limit).await?)
    }

    pub async fn session_attendees(
        &self,
        workshop_id: i64,
    ) -> Result<Vec<attendance::CheckInWithNames>, AppError> {
        Ok(attendance::Model::list_for_workshop(&self.db, workshop_id).await?)
    }

    pub async fn guest_report(&self, guest_id: i64) -> Result<GuestReport, AppError> {
        let (guest, attended, total) = self
            .guest_counts(guest_id)
            .await?
            .ok_or(AppError::GuestNotFound)?;
        let check_ins = attendance::Model::list_for_guest(&self.db, guest.id).await?;

        Ok(GuestReport {
            guest_id: guest.id,
            attended,
            total_workshops: total,
            attendance_percentage: percentage(attended, total),
            eligible_for_certificate: meets_threshold(attended, total),
            has_attended_any: !check_ins.is_empty(),
            check_ins,
        })
    }

    pub async fn workshop_report(&self, workshop_id: i64) -> Result<WorkshopReport, AppError> {
        let workshop = workshop::Entity::find_by_id(workshop_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::SessionNotFound)?;
        let total_guests = guest::Model::count_for_owner(&self.db, workshop.owner_id).await?;
        let in_scope = attendance::Model::count_for_workshop_in_owner_scope(
            &self.db,
            workshop.id,
            workshop.owner_id,
        )
        .await?;
        let attendees = attendance::Model::count_for_workshop(&self.db, workshop.id).await?;

        Ok(WorkshopReport {
            workshop_id: workshop.id,
            attendees,
            total_guests,
            attendance_percentage: percentage(in_scope, total_guests),
            max_capacity: workshop.max_capacity,
            remaining_capacity: workshop
                .max_capacity
                .map(|cap| (cap.max(0) as u64).saturating_sub(attendees)),
        })
    }

    pub async fn dashboard_summary(&self, owner_id: i64) -> Result<DashboardSummary, AppError> {
        let total_workshops = workshop::Model::count_for_owner(&self.db, owner_id).await?;
        let vip_workshops = workshop::Model::count_vip_for_owner(&self.db, owner_id).await?;
        let guests = guest::Model::list_for_owner(&self.db, owner_id).await?;
        let total_check_ins = attendance::Model::count_for_owner(&self.db, owner_id).await?;

        let mut percentage_sum = 0.0;
        let mut eligible_guests = 0;
        for g in &guests {
            let attended =
                attendance::Model::count_for_guest_in_owner_scope(&self.db, g.id, owner_id).await?;
            percentage_sum += percentage(attended, total_workshops);
            if meets_threshold(attended, total_workshops) {
                eligible_guests += 1;
            }
        }

        let total_guests = guests.len() as u64;
        let average_attendance_percentage = if total_guests == 0 {
            0.0
        } else {
            percentage_sum / total_guests as f64
        };

        Ok(DashboardSummary {
            total_workshops,
            vip_workshops,
            total_guests,
            total_check_ins,
            average_attendance_percentage,
            eligible_guests,
        })
    }

    /// Certificate payload for an eligible guest.
    pub async fn certificate_for(&self, guest_id: i64) -> Result<Certificate, AppError> {
        let (guest, attended, total) = self
            .guest_counts(guest_id)
            .await?
            .ok_or(AppError::GuestNotFound)?;

        if !meets_threshold(attended, total) {
            tracing::info!(guest_id, attended, total, "Certificate refused: below threshold");
            return Err(AppError::NotEligible);
        }

        let mut workshops: Vec<String> = attendance::Model::list_for_guest(&self.db, guest.id)
            .await?
            .into_iter()
            .map(|row| row.workshop_name)
            .collect();
        workshops.reverse();

        Ok(Certificate {
            guest_id: guest.id,
            guest_name: guest.name,
            guest_email: guest.email,
            attended,
            total_workshops: total,
            attendance_percentage: percentage(attended, total),
            workshops,
            issued_at: Utc::now(),
        })
    }
}
