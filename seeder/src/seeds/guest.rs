use async_trait::async_trait;
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::DatabaseConnection;
use services::AppError;
use services::guest_service::{CreateGuest, GuestService};

use crate::seed::Seeder;

const GUEST_COUNT: usize = 40;

pub struct GuestSeeder;

#[async_trait]
impl Seeder for GuestSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let admin = super::admin(db).await?;
        let service = GuestService::new(db.clone());

        let mut created = service.list_for_owner(admin.id).await?.len();
        while created < GUEST_COUNT {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();

            match service
                .create(CreateGuest {
                    owner_id: admin.id,
                    name,
                    email,
                    is_vip: fastrand::u8(..10) == 0,
                })
                .await
            {
                Ok(_) => created += 1,
                // Faker repeats itself now and then.
                Err(AppError::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
