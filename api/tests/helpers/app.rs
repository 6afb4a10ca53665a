use std::convert::Infallible;
use std::sync::Once;

use api::auth::generate_jwt;
use api::routes::routes;
use axum::{Router, body::Body, http::Request, response::Response};
use db::models::user::{self, Role};
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::state::AppState;

static INIT: Once = Once::new();

/// Makes sure the config singleton can load before anything reads it.
fn init_env() {
    INIT.call_once(|| {
        if std::env::var("JWT_SECRET").is_err() {
            unsafe {
                std::env::set_var("JWT_SECRET", "api-test-secret");
            }
        }
    });
}

pub struct TestApp {
    pub app: BoxCloneService<Request<Body>, Response, Infallible>,
    pub state: AppState,
    pub admin: user::Model,
    pub scanner: user::Model,
}

impl TestApp {
    pub fn admin_token(&self) -> String {
        generate_jwt(self.admin.id, Role::Admin).0
    }

    pub fn scanner_token(&self) -> String {
        generate_jwt(self.scanner.id, Role::Scanner).0
    }
}

/// Router over a fresh in-memory database with one admin and one scanner account.
pub async fn make_test_app() -> TestApp {
    init_env();

    let db = db::test_utils::setup_test_db().await;
    let admin = user::Model::create(&db, "admin", Role::Admin)
        .await
        .expect("Failed to create admin");
    let scanner = user::Model::create(&db, "door_1", Role::Scanner)
        .await
        .expect("Failed to create scanner");

    let state = AppState::new(db);
    let router = Router::new()
        .nest("/api", routes(state.clone()))
        .with_state(state.clone());

    TestApp {
        app: router.into_service().boxed_clone(),
        state,
        admin,
        scanner,
    }
}
