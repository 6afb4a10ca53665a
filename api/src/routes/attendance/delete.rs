use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::attendance_recorder::AttendanceRecorder;
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::error_reply;

/// DELETE /api/attendance/{attendance_id}
///
/// Undoes a check-in, e.g. after a guest was scanned into the wrong workshop.
pub async fn remove_attendance(
    State(state): State<AppState>,
    Path(attendance_id): Path<i64>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    match AttendanceRecorder::new(state.db_clone())
        .remove_attendance(attendance_id)
        .await
    {
        Ok(()) => {
            tracing::info!(attendance_id, removed_by = claims.sub, "Check-in undone");
            (StatusCode::OK, Json(ApiResponse::success((), "Attendance removed")))
        }
        Err(e) => error_reply(e),
    }
}
