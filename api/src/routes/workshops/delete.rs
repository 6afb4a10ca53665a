use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::{vip_access_service::VipAccessService, workshop_service::WorkshopService};
use util::state::AppState;

use super::common::RevokeVipResponse;
use crate::response::ApiResponse;
use crate::routes::common::error_reply;

/// DELETE /api/workshops/{workshop_id}
///
/// Removes the workshop together with its attendance and VIP grants.
pub async fn delete_workshop(
    State(state): State<AppState>,
    Path(workshop_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    match WorkshopService::new(state.db_clone()).delete(workshop_id).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::success((), "Workshop deleted"))),
        Err(e) => error_reply(e),
    }
}

/// DELETE /api/workshops/{workshop_id}/vip/{guest_id}
///
/// Idempotent: answers `200 OK` whether or not a grant existed; `data.revoked` tells which.
pub async fn revoke_vip(
    State(state): State<AppState>,
    Path((workshop_id, guest_id)): Path<(i64, i64)>,
) -> (StatusCode, Json<ApiResponse<RevokeVipResponse>>) {
    match VipAccessService::new(state.db_clone())
        .revoke_vip(guest_id, workshop_id)
        .await
    {
        Ok(revoked) => {
            let message = if revoked {
                "VIP access revoked"
            } else {
                "No VIP access to revoke"
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(RevokeVipResponse { revoked }, message)),
            )
        }
        Err(e) => error_reply(e),
    }
}
