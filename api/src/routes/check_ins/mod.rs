use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

mod get;
mod post;

pub use get::recent_check_ins;
pub use post::record_check_in;

use crate::auth::guards::{allow_record_check_in, allow_view_analytics};

pub fn check_ins_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(record_check_in).route_layer(from_fn_with_state(app_state.clone(), allow_record_check_in)))
        .route("/recent", get(recent_check_ins).route_layer(from_fn_with_state(app_state.clone(), allow_view_analytics)))
        .with_state(app_state)
}
