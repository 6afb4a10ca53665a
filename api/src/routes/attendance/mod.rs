use axum::{Router, middleware::from_fn_with_state, routing::delete};
use util::state::AppState;

mod delete;

pub use delete::remove_attendance;

use crate::auth::guards::allow_remove_attendance;

pub fn attendance_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{attendance_id}", delete(remove_attendance).route_layer(from_fn_with_state(app_state.clone(), allow_remove_attendance)))
        .with_state(app_state)
}
