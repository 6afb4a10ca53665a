use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use db::models::{attendance::CheckInWithNames, user::Role};
use services::{
    analytics::{AnalyticsService, WorkshopReport},
    vip_access_service::VipAccessService,
    workshop_service::WorkshopService,
};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{GuestResponse, WorkshopResponse, error_reply};

/// GET /api/workshops
///
/// Admins see the workshops they own. Scanners see every workshop so a station
/// can pick the one it is posted at.
///
/// ### Responses
/// - `200 OK` with a list of workshops ordered by start time
/// - `401 Unauthorized` / `403 Forbidden`
pub async fn list_workshops(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<Vec<WorkshopResponse>>>) {
    let service = WorkshopService::new(state.db_clone());
    let result = match user.role() {
        Role::Admin => service.list_for_owner(user.user_id()).await,
        Role::Scanner => service.list_all().await,
    };

    match result {
        Ok(workshops) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                workshops.into_iter().map(WorkshopResponse::from).collect(),
                "Workshops retrieved successfully",
            )),
        ),
        Err(e) => error_reply(e),
    }
}

/// GET /api/workshops/{workshop_id}
pub async fn get_workshop(
    State(state): State<AppState>,
    Path(workshop_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<WorkshopResponse>>) {
    match WorkshopService::new(state.db_clone()).get(workshop_id).await {
        Ok(w) => (
            StatusCode::OK,
            Json(ApiResponse::success(WorkshopResponse::from(w), "Workshop retrieved successfully")),
        ),
        Err(e) => error_reply(e),
    }
}

/// GET /api/workshops/{workshop_id}/attendance
///
/// Check-ins for the workshop with guest names, newest first.
pub async fn get_workshop_attendance(
    State(state): State<AppState>,
    Path(workshop_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<Vec<CheckInWithNames>>>) {
    if let Err(e) = WorkshopService::new(state.db_clone()).get(workshop_id).await {
        return error_reply(e);
    }

    match AnalyticsService::new(state.db_clone())
        .session_attendees(workshop_id)
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Attendance retrieved successfully")),
        ),
        Err(e) => error_reply(e),
    }
}

/// GET /api/workshops/{workshop_id}/stats
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "workshop_id": 3,
///     "attendees": 12,
///     "total_guests": 40,
///     "attendance_percentage": 30.0,
///     "max_capacity": null,
///     "remaining_capacity": null
///   },
///   "message": "Workshop statistics retrieved"
/// }
/// ```
pub async fn get_workshop_stats(
    State(state): State<AppState>,
    Path(workshop_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<Option<WorkshopReport>>>) {
    match AnalyticsService::new(state.db_clone())
        .workshop_report(workshop_id)
        .await
    {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(Some(report), "Workshop statistics retrieved")),
        ),
        Err(e) => error_reply(e),
    }
}

/// GET /api/workshops/{workshop_id}/vip
pub async fn list_vip_guests(
    State(state): State<AppState>,
    Path(workshop_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<Vec<GuestResponse>>>) {
    match VipAccessService::new(state.db_clone())
        .list_vip_guests(workshop_id)
        .await
    {
        Ok(guests) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                guests.into_iter().map(GuestResponse::from).collect(),
                "VIP guests retrieved successfully",
            )),
        ),
        Err(e) => error_reply(e),
    }
}
