//! `/api/workshops` route group: workshop administration, per-workshop
//! attendance and statistics, and VIP grants.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use util::state::AppState;

mod common;
mod delete;
mod get;
mod post;
mod put;

pub use delete::{delete_workshop, revoke_vip};
pub use get::{get_workshop, get_workshop_attendance, get_workshop_stats, list_vip_guests, list_workshops};
pub use post::{create_workshop, grant_vip};
pub use put::update_workshop;

use crate::auth::guards::{
    allow_manage_vip_access, allow_manage_workshops, allow_view_analytics, allow_view_attendance,
    allow_view_workshops,
};

pub fn workshops_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_workshops).route_layer(from_fn_with_state(app_state.clone(), allow_view_workshops)))
        .route("/", post(create_workshop).route_layer(from_fn_with_state(app_state.clone(), allow_manage_workshops)))
        .route("/{workshop_id}", get(get_workshop).route_layer(from_fn_with_state(app_state.clone(), allow_view_workshops)))
        .route("/{workshop_id}", put(update_workshop).route_layer(from_fn_with_state(app_state.clone(), allow_manage_workshops)))
        .route("/{workshop_id}", delete(delete_workshop).route_layer(from_fn_with_state(app_state.clone(), allow_manage_workshops)))
        .route("/{workshop_id}/attendance", get(get_workshop_attendance).route_layer(from_fn_with_state(app_state.clone(), allow_view_attendance)))
        .route("/{workshop_id}/stats", get(get_workshop_stats).route_layer(from_fn_with_state(app_state.clone(), allow_view_analytics)))
        .route("/{workshop_id}/vip", get(list_vip_guests).route_layer(from_fn_with_state(app_state.clone(), allow_manage_vip_access)))
        .route("/{workshop_id}/vip", post(grant_vip).route_layer(from_fn_with_state(app_state.clone(), allow_manage_vip_access)))
        .route("/{workshop_id}/vip/{guest_id}", delete(revoke_vip).route_layer(from_fn_with_state(app_state.clone(), allow_manage_vip_access)))
        .with_state(app_state)
}
