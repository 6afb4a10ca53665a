use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Broad grouping of failures, used by callers to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Referenced guest/session/record does not exist. Never retried.
    NotFound,
    /// Malformed input, rejected before anything is persisted.
    Validation,
    /// Business rejection (VIP mismatch, full session, below threshold).
    AccessDenied,
    /// Input collides with existing data (e.g. duplicate email).
    Conflict,
    /// The store failed. Propagated as-is; nothing retries it.
    Store,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Guest token must have the form 'guest-<id>'")]
    InvalidTokenFormat,

    #[error("Guest not found")]
    GuestNotFound,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Attendance record not found")]
    AttendanceNotFound,

    #[error("Guest does not have VIP access to this session")]
    VipAccessDenied,

    #[error("Session is at full capacity")]
    CapacityExceeded,

    #[error("Session is not a VIP session")]
    NotVipSession,

    #[error("Guest has not reached the attendance required for a certificate")]
    NotEligible,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl AppError {
    /// Stable machine-readable code surfaced to scanner clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            AppError::GuestNotFound => "GUEST_NOT_FOUND",
            AppError::SessionNotFound => "SESSION_NOT_FOUND",
            AppError::AttendanceNotFound => "ATTENDANCE_NOT_FOUND",
            AppError::VipAccessDenied => "VIP_ACCESS_DENIED",
            AppError::CapacityExceeded => "CAPACITY_EXCEEDED",
            AppError::NotVipSession => "NOT_VIP_SESSION",
            AppError::NotEligible => "NOT_ELIGIBLE",
            AppError::Validation(_) => "VALIDATION_FAILED",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Database(_) => "STORE_FAILURE",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::GuestNotFound | AppError::SessionNotFound | AppError::AttendanceNotFound => {
                ErrorCategory::NotFound
            }
            AppError::InvalidTokenFormat | AppError::NotVipSession | AppError::Validation(_) => {
                ErrorCategory::Validation
            }
            AppError::VipAccessDenied | AppError::CapacityExceeded | AppError::NotEligible => {
                ErrorCategory::AccessDenied
            }
            AppError::Conflict(_) => ErrorCategory::Conflict,
            AppError::Database(_) => ErrorCategory::Store,
        }
    }
}

/// True when the store rejected a write because of a unique index.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
