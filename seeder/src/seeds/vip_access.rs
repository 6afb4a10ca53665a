use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use services::AppError;
use services::guest_service::GuestService;
use services::vip_access_service::VipAccessService;
use services::workshop_service::WorkshopService;

use crate::seed::Seeder;

pub struct VipAccessSeeder;

/// Fills each VIP workshop, flagged guests first, leaving one seat open.
#[async_trait]
impl Seeder for VipAccessSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let admin = super::admin(db).await?;
        let vip = VipAccessService::new(db.clone());

        let mut guests = GuestService::new(db.clone()).list_for_owner(admin.id).await?;
        guests.sort_by_key(|g| !g.is_vip);

        let workshops = WorkshopService::new(db.clone()).list_for_owner(admin.id).await?;
        for workshop in workshops.iter().filter(|w| w.is_vip) {
            let seats = workshop.max_capacity.unwrap_or(0).saturating_sub(1).max(0) as usize;
            for guest in guests.iter().take(seats) {
                match vip.grant_vip(guest.id, workshop.id).await {
                    Ok(_) => {}
                    Err(AppError::CapacityExceeded) => break,
                    Err(e) => return Err(e),
                }
            }
        }
        Ok(())
    }
}
