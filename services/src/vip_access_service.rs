use db::models::{guest, vip_access, workshop};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Serialize;

use crate::error::{AppError, is_unique_violation};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "grant", rename_all = "snake_case")]
pub enum VipGrantOutcome {
    Granted(vip_access::Model),
    AlreadyGranted(vip_access::Model),
}

impl VipGrantOutcome {
    pub fn grant(&self) -> &vip_access::Model {
        match self {
            VipGrantOutcome::Granted(g) | VipGrantOutcome::AlreadyGranted(g) => g,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, VipGrantOutcome::Granted(_))
    }
}

/// Manages per-session VIP grants. A grant is the only thing that admits a guest
/// into a VIP workshop.
pub struct VipAccessService {
    db: DatabaseConnection,
}

/// Inserts the grant on `conn`, reading back the stored grant when the unique
/// (guest, workshop) index reports a concurrent duplicate.
pub(crate) async fn insert_or_existing<C: ConnectionTrait>(
    conn: &C,
    guest_id: i64,
    workshop_id: i64,
) -> Result<VipGrantOutcome, AppError> {
    match vip_access::Model::insert(conn, guest_id, workshop_id).await {
        Ok(grant) => Ok(VipGrantOutcome::Granted(grant)),
        Err(err) if is_unique_violation(&err) => {
            match vip_access::Model::find_for(conn, guest_id, workshop_id).await? {
                Some(existing) => Ok(VipGrantOutcome::AlreadyGranted(existing)),
                None => Err(AppError::Database(err)),
            }
        }
        Err(err) => Err(AppError::Database(err)),
    }
}

impl VipAccessService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn grant_vip(
        &self,
        guest_id: i64,
        workshop_id: i64,
    ) -> Result<VipGrantOutcome, AppError> {
        guest::Entity::find_by_id(guest_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::GuestNotFound)?;
        let workshop = workshop::Entity::find_by_id(workshop_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::SessionNotFound)?;

        if !workshop.is_vip {
            return Err(AppError::NotVipSession);
        }

        let txn = self.db.begin().await?;

        if let Some(existing) = vip_access::Model::find_for(&txn, guest_id, workshop_id).await? {
            txn.rollback().await?;
            return Ok(VipGrantOutcome::AlreadyGranted(existing));
        }

        if let Some(capacity) = workshop.max_capacity {
            let granted = vip_access::Model::count_for_workshop(&txn, workshop_id).await?;
            if granted >= capacity.max(0) as u64 {
                txn.rollback().await?;
                tracing::warn!(guest_id, workshop_id, capacity, "VIP grant rejected: capacity reached");
                return Err(AppError::CapacityExceeded);
            }
        }

        match insert_or_existing(&txn, guest_id, workshop_id).await {
            Ok(VipGrantOutcome::Granted(grant)) => {
                txn.commit().await?;
                tracing::info!(guest_id, workshop_id, "VIP access granted");
                Ok(VipGrantOutcome::Granted(grant))
            }
            other => {
                txn.rollback().await?;
                other
            }
        }
    }

    /// Returns whether a grant existed and was removed.
    pub async fn revoke_vip(&self, guest_id: i64, workshop_id: i64) -> Result<bool, AppError> {
        let removed = vip_access::Model::delete_for(&self.db, guest_id, workshop_id).await?;
        if removed {
            tracing::info!(guest_id, workshop_id, "VIP access revoked");
        }
        Ok(removed)
    }

    pub async fn list_vip_guests(&self, workshop_id: i64) -> Result<Vec<guest::Model>, AppError> {
        workshop::Entity::find_by_id(workshop_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::SessionNotFound)?;
        Ok(vip_access::Model::guests_for_workshop(&self.db, workshop_id).await?)
    }

    pub async fn list_vip_sessions(&self, guest_id: i64) -> Result<Vec<workshop::Model>, AppError> {
        guest::Entity::find_by_id(guest_id)
            .one(&self.db)
            .await?
            .ok_or(AppError::GuestNotFound)?;
        Ok(vip_access::Model::workshops_for_guest(&self.db, guest_id).await?)
    }

    pub async fn has_vip_access(&self, guest_id: i64, workshop_id: i64) -> Result<bool, AppError> {
        Ok(vip_access::Model::exists_for(&self.db, guest_id, workshop_id).await?)
    }
}
