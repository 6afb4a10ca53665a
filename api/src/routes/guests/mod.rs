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

pub use delete::delete_guest;
pub use get::{
    get_guest, get_guest_by_token, get_guest_certificate, get_guest_stats, list_guest_vip_sessions,
    list_guests,
};
pub use post::create_guest;
pub use put::update_guest;

use crate::auth::guards::{
    allow_issue_certificate, allow_manage_guests, allow_manage_vip_access, allow_record_check_in,
    allow_view_analytics,
};

pub fn guests_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_guests).route_layer(from_fn_with_state(app_state.clone(), allow_manage_guests)))
        .route("/", post(create_guest).route_layer(from_fn_with_state(app_state.clone(), allow_manage_guests)))
        .route("/token/{token}", get(get_guest_by_token).route_layer(from_fn_with_state(app_state.clone(), allow_record_check_in)))
        .route("/{guest_id}", get(get_guest).route_layer(from_fn_with_state(app_state.clone(), allow_manage_guests)))
        .route("/{guest_id}", put(update_guest).route_layer(from_fn_with_state(app_state.clone(), allow_manage_guests)))
        .route("/{guest_id}", delete(delete_guest).route_layer(from_fn_with_state(app_state.clone(), allow_manage_guests)))
        .route("/{guest_id}/vip", get(list_guest_vip_sessions).route_layer(from_fn_with_state(app_state.clone(), allow_manage_vip_access)))
        .route("/{guest_id}/stats", get(get_guest_stats).route_layer(from_fn_with_state(app_state.clone(), allow_view_analytics)))
        .route("/{guest_id}/certificate", get(get_guest_certificate).route_layer(from_fn_with_state(app_state.clone(), allow_issue_certificate)))
        .with_state(app_state)
}
