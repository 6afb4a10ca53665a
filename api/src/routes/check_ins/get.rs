use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use db::models::attendance::CheckInWithNames;
use serde::Deserialize;
use services::analytics::AnalyticsService;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::error_reply;

const DEFAULT_RECENT: u64 = 10;
const MAX_RECENT: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u64>,
}

/// GET /api/check-ins/recent?limit=n
///
/// The `n` newest check-ins across all workshops (default 10, capped at 100).
pub async fn recent_check_ins(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> (StatusCode, Json<ApiResponse<Vec<CheckInWithNames>>>) {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT).min(MAX_RECENT);

    match AnalyticsService::new(state.db_clone())
        .recent_check_ins(limit)
        .await
    {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(rows, "Recent check-ins retrieved")),
        ),
        Err(e) => error_reply(e),
    }
}
