use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::workshop_service::{UpdateWorkshop, WorkshopService};
use util::state::AppState;
use validator::Validate;

use super::common::UpdateWorkshopReq;
use crate::response::ApiResponse;
use crate::routes::common::{WorkshopResponse, bad_request, error_reply, format_validation_errors};

/// PUT /api/workshops/{workshop_id}
///
/// Partial update: omitted fields keep their value. Turning `is_vip` off drops the
/// capacity and every VIP grant of the workshop.
pub async fn update_workshop(
    State(state): State<AppState>,
    Path(workshop_id): Path<i64>,
    Json(req): Json<UpdateWorkshopReq>,
) -> (StatusCode, Json<ApiResponse<WorkshopResponse>>) {
    if let Err(e) = req.validate() {
        return bad_request(format_validation_errors(&e));
    }
    if req.is_empty() {
        return bad_request("At least one field must be provided");
    }

    let params = UpdateWorkshop {
        name: req.name,
        description: req.description,
        location: req.location,
        starts_at: req.starts_at,
        is_vip: req.is_vip,
        max_capacity: req.max_capacity,
    };

    match WorkshopService::new(state.db_clone())
        .update(workshop_id, params)
        .await
    {
        Ok(w) => (
            StatusCode::OK,
            Json(ApiResponse::success(WorkshopResponse::from(w), "Workshop updated")),
        ),
        Err(e) => error_reply(e),
    }
}
