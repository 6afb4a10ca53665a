use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::guest_service::{GuestService, UpdateGuest};
use util::state::AppState;
use validator::Validate;

use super::common::UpdateGuestReq;
use crate::response::ApiResponse;
use crate::routes::common::{GuestResponse, bad_request, error_reply, format_validation_errors};

/// PUT /api/guests/{guest_id}
///
/// Updates name, email or the informational VIP flag. The QR token never changes.
pub async fn update_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<i64>,
    Json(req): Json<UpdateGuestReq>,
) -> (StatusCode, Json<ApiResponse<GuestResponse>>) {
    if let Err(e) = req.validate() {
        return bad_request(format_validation_errors(&e));
    }
    if req.name.is_none() && req.email.is_none() && req.is_vip.is_none() {
        return bad_request("At least one field must be provided");
    }

    let params = UpdateGuest {
        name: req.name,
        email: req.email,
        is_vip: req.is_vip,
    };

    match GuestService::new(state.db_clone()).update(guest_id, params).await {
        Ok(g) => (
            StatusCode::OK,
            Json(ApiResponse::success(GuestResponse::from(g), "Guest updated")),
        ),
        Err(e) => error_reply(e),
    }
}
