use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::guest_service::GuestService;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::error_reply;

/// DELETE /api/guests/{guest_id}
///
/// Removes the guest with their attendance and VIP grants.
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    match GuestService::new(state.db_clone()).delete(guest_id).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success((), "Guest deleted"))),
        Err(e) => error_reply(e),
    }
}
