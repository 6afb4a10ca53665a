//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/workshops` → workshop administration, per-workshop attendance, stats and VIP grants
//! - `/guests` → guest registry, token lookup, stats and certificates
//! - `/check-ins` → recording scans and the recent check-in feed
//! - `/attendance` → correcting mis-scans
//! - `/dashboard` → per-admin totals
//!
//! Every non-public route carries exactly one capability guard, see
//! [`crate::auth::capabilities`].

use axum::Router;
use util::state::AppState;

use crate::routes::{
    attendance::attendance_routes, check_ins::check_ins_routes, dashboard::dashboard_routes,
    guests::guests_routes, health::health_routes, workshops::workshops_routes,
};

pub mod attendance;
pub mod check_ins;
pub mod common;
pub mod dashboard;
pub mod guests;
pub mod health;
pub mod workshops;

/// Builds the router for everything under `/api`.
pub fn routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/workshops", workshops_routes(app_state.clone()))
        .nest("/guests", guests_routes(app_state.clone()))
        .nest("/check-ins", check_ins_routes(app_state.clone()))
        .nest("/attendance", attendance_routes(app_state.clone()))
        .nest("/dashboard", dashboard_routes(app_state.clone()))
        .with_state(app_state)
}
