use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::get,
};
use services::analytics::{AnalyticsService, DashboardSummary};
use util::state::AppState;

use crate::auth::{AuthUser, guards::allow_view_analytics};
use crate::response::ApiResponse;
use crate::routes::common::error_reply;

pub fn dashboard_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_dashboard).route_layer(from_fn_with_state(app_state.clone(), allow_view_analytics)),
        )
        .with_state(app_state)
}

/// GET /api/dashboard
///
/// Totals over the calling admin's workshops and guests.
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "total_workshops": 6,
///     "vip_workshops": 2,
///     "total_guests": 40,
///     "total_check_ins": 131,
///     "average_attendance_percentage": 54.58,
///     "eligible_guests": 13
///   },
///   "message": "Dashboard retrieved"
/// }
/// ```
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
) -> (StatusCode, Json<ApiResponse<DashboardSummary>>) {
    match AnalyticsService::new(state.db_clone())
        .dashboard_summary(claims.sub)
        .await
    {
        Ok(summary) => (StatusCode::OK, Json(ApiResponse::success(summary, "Dashboard retrieved"))),
        Err(e) => error_reply(e),
    }
}
