use axum::{Json, Router, response::IntoResponse, routing::get};
use chrono::Utc;
use serde::Serialize;
use util::{config, state::AppState};

use crate::response::ApiResponse;

/// `GET /health`, public.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    service: String,
    env: String,
    time: String,
}

/// GET /health
///
/// ```json
/// {
///   "success": true,
///   "data": { "status": "OK", "service": "workshop-attendance", "env": "development", "time": "..." },
///   "message": "Health check passed"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success(
        Health {
            status: "OK",
            service: config::project_name(),
            env: config::env(),
            time: Utc::now().to_rfc3339(),
        },
        "Health check passed",
    ))
}
