use async_trait::async_trait;
use db::models::user::{Model, Role};
use sea_orm::DatabaseConnection;
use services::AppError;

use super::{ADMIN, SCANNERS};
use crate::seed::Seeder;

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let accounts = std::iter::once((ADMIN, Role::Admin))
            .chain(SCANNERS.iter().map(|name| (*name, Role::Scanner)));

        for (username, role) in accounts {
            if Model::find_by_username(db, username).await?.is_none() {
                Model::create(db, username, role).await?;
            }
        }
        Ok(())
    }
}
