use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::{
    vip_access_service::{VipAccessService, VipGrantOutcome},
    workshop_service::{CreateWorkshop, WorkshopService},
};
use util::state::AppState;
use validator::Validate;

use super::common::{CreateWorkshopReq, GrantVipReq, VipGrantResponse};
use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{WorkshopResponse, bad_request, error_reply, format_validation_errors};

/// POST /api/workshops
///
/// Creates a workshop owned by the calling admin.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Backstage tour",
///   "description": "Limited seats",
///   "location": "Stage door",
///   "starts_at": "2025-11-03T09:00:00Z",
///   "is_vip": true,
///   "max_capacity": 12
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the workshop
/// - `400 Bad Request` when the name is empty, or a VIP workshop has no capacity or one outside 1..=31
/// - `403 Forbidden` for scanner accounts
pub async fn create_workshop(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateWorkshopReq>,
) -> (StatusCode, Json<ApiResponse<WorkshopResponse>>) {
    if let Err(e) = req.validate() {
        return bad_request(format_validation_errors(&e));
    }

    let params = CreateWorkshop {
        owner_id: claims.sub,
        name: req.name,
        description: req.description,
        location: req.location,
        starts_at: req.starts_at,
        is_vip: req.is_vip,
        max_capacity: req.max_capacity,
    };

    match WorkshopService::new(state.db_clone()).create(params).await {
        Ok(w) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(WorkshopResponse::from(w), "Workshop created")),
        ),
        Err(e) => error_reply(e),
    }
}

/// POST /api/workshops/{workshop_id}/vip
///
/// Grants a guest VIP access to the workshop. Granting twice is a no-op that still
/// answers `200 OK`; a new grant answers `201 Created`.
///
/// ### Errors
/// - `400` if the workshop is not a VIP workshop
/// - `404` if the guest or workshop does not exist
/// - `409` if the workshop's grants already fill its capacity
pub async fn grant_vip(
    State(state): State<AppState>,
    Path(workshop_id): Path<i64>,
    Json(req): Json<GrantVipReq>,
) -> (StatusCode, Json<ApiResponse<VipGrantResponse>>) {
    match VipAccessService::new(state.db_clone())
        .grant_vip(req.guest_id, workshop_id)
        .await
    {
        Ok(outcome) => {
            let (status, message) = match &outcome {
                VipGrantOutcome::Granted(_) => (StatusCode::CREATED, "VIP access granted"),
                VipGrantOutcome::AlreadyGranted(_) => (StatusCode::OK, "VIP access already granted"),
            };
            let grant = outcome.grant();
            let data = VipGrantResponse {
                id: grant.id,
                guest_id: grant.guest_id,
                workshop_id: grant.workshop_id,
                granted_at: grant.granted_at.to_rfc3339(),
                newly_granted: outcome.is_new(),
            };
            (status, Json(ApiResponse::success(data, message)))
        }
        Err(e) => error_reply(e),
    }
}
