use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use services::attendance_recorder::{AttendanceRecorder, CheckInOutcome, Signal};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{AttendanceResponse, status_for};

#[derive(Debug, Deserialize)]
pub struct CheckInReq {
    pub guest_token: String,
    pub workshop_id: i64,
}

/// Scan result as shown by a station. Present on failures too, so the station can
/// play the right tone from `signal` and branch on `code`.
#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub code: &'static str,
    pub signal: Signal,
    pub attendance: Option<AttendanceResponse>,
}

/// POST /api/check-ins
///
/// Records a scanned guest entering a workshop.
///
/// ### Request Body
/// ```json
/// { "guest_token": "guest-42", "workshop_id": 3 }
/// ```
///
/// ### Responses
/// - `201 Created`, code `CHECKED_IN`
/// - `200 OK`, code `ALREADY_CHECKED_IN` (repeat scans are not errors)
/// - `400 Bad Request`, code `INVALID_TOKEN_FORMAT`
/// - `404 Not Found`, code `GUEST_NOT_FOUND` or `SESSION_NOT_FOUND`
/// - `403 Forbidden`, code `VIP_ACCESS_DENIED`
/// - `409 Conflict`, code `CAPACITY_EXCEEDED`
///
/// ```json
/// {
///   "success": false,
///   "data": { "code": "VIP_ACCESS_DENIED", "signal": "error", "attendance": null },
///   "message": "Guest does not have VIP access to this session"
/// }
/// ```
pub async fn record_check_in(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CheckInReq>,
) -> (StatusCode, Json<ApiResponse<CheckInResponse>>) {
    let recorder = AttendanceRecorder::new(state.db_clone());

    match recorder
        .record_check_in(&req.guest_token, req.workshop_id, claims.sub)
        .await
    {
        Ok(outcome) => {
            let status = match outcome {
                CheckInOutcome::CheckedIn(_) => StatusCode::CREATED,
                CheckInOutcome::AlreadyCheckedIn(_) => StatusCode::OK,
            };
            let message = outcome.message();
            let data = CheckInResponse {
                code: outcome.code(),
                signal: outcome.signal(),
                attendance: Some(AttendanceResponse::from(outcome.attendance().clone())),
            };
            (status, Json(ApiResponse::success(data, message)))
        }
        Err(e) => {
            let status = status_for(&e);
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                tracing::error!(error = %e, workshop_id = req.workshop_id, "Check-in failed");
            }
            let data = CheckInResponse {
                code: e.code(),
                signal: Signal::Error,
                attendance: None,
            };
            (status, Json(ApiResponse::failure(data, e.to_string())))
        }
    }
}
