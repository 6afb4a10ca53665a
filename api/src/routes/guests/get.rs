use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use services::{
    analytics::{AnalyticsService, Certificate, GuestReport},
    guest_service::GuestService,
    vip_access_service::VipAccessService,
};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{GuestResponse, WorkshopResponse, error_reply};

/// GET /api/guests
///
/// Guests registered by the calling admin, ordered by name.
pub async fn list_guests(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<Vec<GuestResponse>>>) {
    match GuestService::new(state.db_clone())
        .list_for_owner(claims.sub)
        .await
    {
        Ok(guests) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                guests.into_iter().map(GuestResponse::from).collect(),
                "Guests retrieved successfully",
            )),
        ),
        Err(e) => error_reply(e),
    }
}

pub async fn get_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<GuestResponse>>) {
    match GuestService::new(state.db_clone()).get(guest_id).await {
        Ok(g) => (
            StatusCode::OK,
            Json(ApiResponse::success(GuestResponse::from(g), "Guest retrieved successfully")),
        ),
        Err(e) => error_reply(e),
    }
}

/// GET /api/guests/token/{token}
///
/// Looks up the guest behind a scanned QR token so a station can show who is at the
/// door before checking them in.
///
/// ### Responses
/// - `200 OK` with the guest
/// - `400 Bad Request` if the token is not of the form `guest-<id>`
/// - `404 Not Found` if no guest carries the token
pub async fn get_guest_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> (StatusCode, Json<ApiResponse<GuestResponse>>) {
    match GuestService::new(state.db_clone()).find_by_token(&token).await {
        Ok(g) => (
            StatusCode::OK,
            Json(ApiResponse::success(GuestResponse::from(g), "Guest retrieved successfully")),
        ),
        Err(e) => error_reply(e),
    }
}

/// GET /api/guests/{guest_id}/vip
///
/// VIP workshops the guest holds a grant for, by start time.
pub async fn list_guest_vip_sessions(
    State(state): State<AppState>,
    Path(guest_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<Vec<WorkshopResponse>>>) {
    match VipAccessService::new(state.db_clone())
        .list_vip_sessions(guest_id)
        .await
    {
        Ok(workshops) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                workshops.into_iter().map(WorkshopResponse::from).collect(),
                "VIP workshops retrieved successfully",
            )),
        ),
        Err(e) => error_reply(e),
    }
}

/// GET /api/guests/{guest_id}/stats
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "guest_id": 7,
///     "attended": 7,
///     "total_workshops": 10,
///     "attendance_percentage": 70.0,
///     "eligible_for_certificate": true,
///     "has_attended_any": true,
///     "check_ins": [ { "id": 31, "guest_name": "Ada", "workshop_name": "Keynote", ... } ]
///   },
///   "message": "Guest statistics retrieved"
/// }
/// ```
pub async fn get_guest_stats(
    State(state): State<AppState>,
    Path(guest_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<Option<GuestReport>>>) {
    match AnalyticsService::new(state.db_clone()).guest_report(guest_id).await {
        Ok(report) => (
            StatusCode::OK,
            Json(ApiResponse::success(Some(report), "Guest statistics retrieved")),
        ),
        Err(e) => error_reply(e),
    }
}

/// GET /api/guests/{guest_id}/certificate
///
/// Certificate payload for a guest who attended at least 70% of their owner's
/// workshops; `422 Unprocessable Entity` below that.
pub async fn get_guest_certificate(
    State(state): State<AppState>,
    Path(guest_id): Path<i64>,
) -> (StatusCode, Json<ApiResponse<Option<Certificate>>>) {
    match AnalyticsService::new(state.db_clone())
        .certificate_for(guest_id)
        .await
    {
        Ok(cert) => (
            StatusCode::OK,
            Json(ApiResponse::success(Some(cert), "Certificate issued")),
        ),
        Err(e) => error_reply(e),
    }
}
