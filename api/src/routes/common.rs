//! Helpers shared by the route modules: error to status mapping, validation
//! messages and the response DTOs.

use axum::http::StatusCode;
use db::models::{attendance, guest, workshop};
use serde::Serialize;
use services::{AppError, ErrorCategory};
use validator::ValidationErrors;

use crate::response::{ApiReply, ApiResponse};

/// Joins the messages of all field errors into one line.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn status_for(err: &AppError) -> StatusCode {
    match err {
        AppError::NotEligible => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::CapacityExceeded => StatusCode::CONFLICT,
        _ => match err.category() {
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::AccessDenied => StatusCode::FORBIDDEN,
            ErrorCategory::Conflict => StatusCode::CONFLICT,
            ErrorCategory::Store => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

/// Turns a service error into the standard error envelope.
pub fn error_reply<T>(err: AppError) -> ApiReply<T>
where
    T: Serialize + Default,
{
    let status = status_for(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "Request failed");
    }
    ApiResponse::error(err.to_string()).reply(status)
}

pub fn bad_request<T>(message: impl Into<String>) -> ApiReply<T>
where
    T: Serialize + Default,
{
    ApiResponse::error(message).reply(StatusCode::BAD_REQUEST)
}

#[derive(Debug, Serialize, Default)]
pub struct WorkshopResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: String,
    pub owner_id: i64,
    pub is_vip: bool,
    pub max_capacity: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<workshop::Model> for WorkshopResponse {
    fn from(w: workshop::Model) -> Self {
        Self {
            id: w.id,
            name: w.name,
            description: w.description,
            location: w.location,
            starts_at: w.starts_at.to_rfc3339(),
            owner_id: w.owner_id,
            is_vip: w.is_vip,
            max_capacity: w.max_capacity,
            created_at: w.created_at.to_rfc3339(),
            updated_at: w.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct GuestResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub qr_code: String,
    pub is_vip: bool,
    pub owner_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<guest::Model> for GuestResponse {
    fn from(g: guest::Model) -> Self {
        Self {
            id: g.id,
            name: g.name,
            email: g.email,
            qr_code: g.qr_code,
            is_vip: g.is_vip,
            owner_id: g.owner_id,
            created_at: g.created_at.to_rfc3339(),
            updated_at: g.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct AttendanceResponse {
    pub id: i64,
    pub guest_id: i64,
    pub workshop_id: i64,
    pub checked_in_at: String,
    pub recorded_by: Option<i64>,
}

impl From<attendance::Model> for AttendanceResponse {
    fn from(a: attendance::Model) -> Self {
        Self {
            id: a.id,
            guest_id: a.guest_id,
            workshop_id: a.workshop_id,
            checked_in_at: a.checked_in_at.to_rfc3339(),
            recorded_by: a.recorded_by,
        }
    }
}
