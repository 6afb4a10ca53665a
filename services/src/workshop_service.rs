use chrono::{DateTime, Utc};
use db::models::workshop::{self, MAX_VIP_CAPACITY, WorkshopFields};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::error::AppError;

pub use db::models::workshop::Model as Workshop;

#[derive(Debug, Clone)]
pub struct CreateWorkshop {
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub is_vip: bool,
    pub max_capacity: Option<i32>,
}

/// Partial update; `None` leaves a field unchanged. For `description` and
/// `location`, `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkshop {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub starts_at: Option<DateTime<Utc>>,
    pub is_vip: Option<bool>,
    pub max_capacity: Option<i32>,
}

impl From<CreateWorkshop> for WorkshopFields {
    fn from(c: CreateWorkshop) -> Self {
        Self {
            name: c.name,
            description: c.description,
            location: c.location,
            starts_at: c.starts_at,
            is_vip: c.is_vip,
            max_capacity: c.max_capacity,
        }
    }
}

impl UpdateWorkshop {
    fn apply(self, mut fields: WorkshopFields) -> WorkshopFields {
        if let Some(name) = self.name {
            fields.name = name;
        }
        if let Some(description) = self.description {
            fields.description = description;
        }
        if let Some(location) = self.location {
            fields.location = location;
        }
        if let Some(starts_at) = self.starts_at {
            fields.starts_at = starts_at;
        }
        if let Some(is_vip) = self.is_vip {
            fields.is_vip = is_vip;
        }
        if self.max_capacity.is_some() {
            fields.max_capacity = self.max_capacity;
        }
        fields
    }
}

fn validate(fields: &WorkshopFields) -> Result<(), AppError> {
    if fields.name.trim().is_empty() {
        return Err(AppError::Validation("Workshop name is required".into()));
    }
    if !fields.capacity_is_valid() {
        return Err(AppError::Validation(format!(
            "VIP workshops need a capacity between 1 and {MAX_VIP_CAPACITY}"
        )));
    }
    Ok(())
}

pub struct WorkshopService {
    db: DatabaseConnection,
}

impl WorkshopService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateWorkshop) -> Result<Workshop, AppError> {
        let owner_id = params.owner_id;
        let mut fields = WorkshopFields::from(params);
        fields.name = fields.name.trim().to_owned();
        validate(&fields)?;

        let created = workshop::Model::create(&self.db, owner_id, fields).await?;
        tracing::info!(workshop_id = created.id, owner_id, vip = created.is_vip, "Workshop created");
        Ok(created)
    }

    pub async fn update(&self, id: i64, params: UpdateWorkshop) -> Result<Workshop, AppError> {
        let existing = self.get(id).await?;
        let mut fields = params.apply(WorkshopFields::from(&existing));
        fields.name = fields.name.trim().to_owned();
        validate(&fields)?;

        if existing.is_vip && !fields.is_vip {
            tracing::info!(workshop_id = id, "Workshop demoted from VIP; grants dropped");
        }

        workshop::Model::edit(&self.db, id, fields)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotFound(_) => AppError::SessionNotFound,
                other => AppError::Database(other),
            })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if workshop::Model::delete_by_id(&self.db, id).await? {
            tracing::info!(workshop_id = id, "Workshop deleted");
            Ok(())
        } else {
            Err(AppError::SessionNotFound)
        }
    }

    pub async fn get(&self, id: i64) -> Result<Workshop, AppError> {
        workshop::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::SessionNotFound)
    }

    pub async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Workshop>, AppError> {
        Ok(workshop::Model::list_for_owner(&self.db, owner_id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Workshop>, AppError> {
        Ok(workshop::Model::list_all(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{guest, staff};
    use crate::vip_access_service::VipAccessService;
    use chrono::TimeZone;
    use db::models::vip_access;
    use db::test_utils::setup_test_db;

    fn params(owner_id: i64, name: &str, is_vip: bool, max_capacity: Option<i32>) -> CreateWorkshop {
        CreateWorkshop {
            owner_id,
            name: name.to_owned(),
            description: Some("Hands-on".into()),
            location: None,
            starts_at: Utc.with_ymd_and_hms(2025, 11, 3, 9, 0, 0).unwrap(),
            is_vip,
            max_capacity,
        }
    }

    #[tokio::test]
    async fn create_validates_before_persisting() {
        let db = setup_test_db().await;
        let s = staff(&db).await;
        let svc = WorkshopService::new(db.clone());

        for bad in [
            params(s.admin.id, "  ", false, None),
            params(s.admin.id, "Lounge", true, None),
            params(s.admin.id, "Lounge", true, Some(0)),
            params(s.admin.id, "Lounge", true, Some(MAX_VIP_CAPACITY + 1)),
        ] {
            assert!(matches!(svc.create(bad).await.unwrap_err(), AppError::Validation(_)));
        }
        assert!(svc.list_for_owner(s.admin.id).await.unwrap().is_empty());

        let ok = svc
            .create(params(s.admin.id, "Lounge", true, Some(MAX_VIP_CAPACITY)))
            .await
            .unwrap();
        assert_eq!(ok.max_capacity, Some(MAX_VIP_CAPACITY));
    }

    #[tokio::test]
    async fn open_workshop_capacity_is_dropped() {
        let db = setup_test_db().await;
        let s = staff(&db).await;
        let svc = WorkshopService::new(db.clone());

        let w = svc
            .create(params(s.admin.id, " Opening ", false, Some(10)))
            .await
            .unwrap();
        assert_eq!(w.name, "Opening");
        assert_eq!(w.max_capacity, None);
    }

    #[tokio::test]
    async fn partial_update_and_demotion_drops_grants() {
        let db = setup_test_db().await;
        let s = staff(&db).await;
        let svc = WorkshopService::new(db.clone());
        let w = svc
            .create(params(s.admin.id, "Lounge", true, Some(4)))
            .await
            .unwrap();
        let g = guest(&db, s.admin.id, "Ada").await;
        VipAccessService::new(db.clone()).grant_vip(g.id, w.id).await.unwrap();

        let renamed = svc
            .update(
                w.id,
                UpdateWorkshop {
                    name: Some("VIP Lounge".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "VIP Lounge");
        assert_eq!(renamed.max_capacity, Some(4));
        assert_eq!(renamed.description.as_deref(), Some("Hands-on"));

        let cleared = svc
            .update(
                w.id,
                UpdateWorkshop {
                    description: Some(None),
                    location: Some(Some("Rooftop".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.description, None);
        assert_eq!(cleared.location.as_deref(), Some("Rooftop"));
        assert_eq!(cleared.name, "VIP Lounge");

        let demoted = svc
            .update(
                w.id,
                UpdateWorkshop {
                    is_vip: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!demoted.is_vip);
        assert_eq!(demoted.max_capacity, None);
        assert_eq!(vip_access::Model::count_for_workshop(&db, w.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn promoting_without_capacity_is_rejected() {
        let db = setup_test_db().await;
        let s = staff(&db).await;
        let svc = WorkshopService::new(db.clone());
        let w = svc.create(params(s.admin.id, "Opening", false, None)).await.unwrap();

        let err = svc
            .update(
                w.id,
                UpdateWorkshop {
                    is_vip: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(!svc.get(w.id).await.unwrap().is_vip);
    }

    #[tokio::test]
    async fn missing_workshop_is_session_not_found() {
        let db = setup_test_db().await;
        let svc = WorkshopService::new(db.clone());

        assert!(matches!(svc.get(7).await.unwrap_err(), AppError::SessionNotFound));
        assert!(matches!(svc.delete(7).await.unwrap_err(), AppError::SessionNotFound));
        assert!(matches!(
            svc.update(7, UpdateWorkshop::default()).await.unwrap_err(),
            AppError::SessionNotFound
        ));
    }
}
