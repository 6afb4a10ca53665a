use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DatabaseConnection;
use services::AppError;
use services::workshop_service::{CreateWorkshop, WorkshopService};

use crate::seed::Seeder;

pub struct WorkshopSeeder;

/// (name, location, VIP capacity)
const WORKSHOPS: [(&str, &str, Option<i32>); 6] = [
    ("Opening Keynote", "Main Hall", None),
    ("Rust in Production", "Room 101", None),
    ("Async Deep Dive", "Room 102", None),
    ("Speaker Dinner", "Rooftop", Some(10)),
    ("Backstage Tour", "Stage Door", Some(5)),
    ("Closing Panel", "Main Hall", None),
];

#[async_trait]
impl Seeder for WorkshopSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let admin = super::admin(db).await?;
        let service = WorkshopService::new(db.clone());
        if !service.list_for_owner(admin.id).await?.is_empty() {
            return Ok(());
        }

        let day_start = Utc
            .with_ymd_and_hms(2025, 11, 3, 8, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);

        for (i, (name, location, capacity)) in WORKSHOPS.iter().enumerate() {
            service
                .create(CreateWorkshop {
                    owner_id: admin.id,
                    name: (*name).to_owned(),
                    description: None,
                    location: Some((*location).to_owned()),
                    starts_at: day_start + Duration::minutes(90 * i as i64),
                    is_vip: capacity.is_some(),
                    max_capacity: *capacity,
                })
                .await?;
        }
        Ok(())
    }
}
