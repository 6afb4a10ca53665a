pub mod attendance;
pub mod guest;
pub mod user;
pub mod vip_access;
pub mod workshop;

use db::models::user as user_model;
use sea_orm::DatabaseConnection;
use services::AppError;

pub const ADMIN: &str = "admin";
pub const SCANNERS: [&str; 2] = ["door_1", "door_2"];

/// The seeded admin every other seeder attaches its rows to.
pub async fn admin(db: &DatabaseConnection) -> Result<user_model::Model, AppError> {
    user_model::Model::find_by_username(db, ADMIN)
        .await?
        .ok_or_else(|| AppError::Validation("Seed the admin account first".into()))
}
