use async_trait::async_trait;
use db::models::user;
use sea_orm::DatabaseConnection;
use services::AppError;
use services::attendance_recorder::AttendanceRecorder;
use services::guest_service::GuestService;
use services::workshop_service::WorkshopService;

use super::SCANNERS;
use crate::seed::Seeder;

/// Chance that a guest shows up to any given workshop.
const SHOW_UP_PERCENT: u8 = 65;

pub struct AttendanceSeeder;

#[async_trait]
impl Seeder for AttendanceSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let admin = super::admin(db).await?;
        let mut stations = Vec::new();
        for name in SCANNERS {
            if let Some(account) = user::Model::find_by_username(db, name).await? {
                stations.push(account.id);
            }
        }
        if stations.is_empty() {
            stations.push(admin.id);
        }

        let recorder = AttendanceRecorder::new(db.clone());
        let guests = GuestService::new(db.clone()).list_for_owner(admin.id).await?;
        let workshops = WorkshopService::new(db.clone()).list_for_owner(admin.id).await?;

        for workshop in &workshops {
            for guest in &guests {
                if fastrand::u8(..100) >= SHOW_UP_PERCENT {
                    continue;
                }
                let station = stations[fastrand::usize(..stations.len())];
                match recorder
                    .record_check_in(&guest.qr_code, workshop.id, station)
                    .await
                {
                    Ok(_) | Err(AppError::VipAccessDenied) | Err(AppError::CapacityExceeded) => {}
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }
}
