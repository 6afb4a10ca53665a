use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait};

/// Upper bound on `max_capacity` for VIP workshops.
pub const MAX_VIP_CAPACITY: i32 = 31;

/// A scheduled session guests check into.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "workshops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub owner_id: i64,
    pub is_vip: bool,
    /// Set exactly when `is_vip` is true.
    pub max_capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::vip_access::Entity")]
    VipAccess,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::vip_access::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VipAccess.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Administrator-editable fields of a workshop.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopFields {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub is_vip: bool,
    pub max_capacity: Option<i32>,
}

impl WorkshopFields {
    /// Drops any capacity on a non-VIP workshop.
    pub fn normalized(mut self) -> Self {
        if !self.is_vip {
            self.max_capacity = None;
        }
        self
    }

    /// VIP workshops need a capacity in `1..=MAX_VIP_CAPACITY`.
    pub fn capacity_is_valid(&self) -> bool {
        match (self.is_vip, self.max_capacity) {
            (false, _) => true,
            (true, Some(cap)) => (1..=MAX_VIP_CAPACITY).contains(&cap),
            (true, None) => false,
        }
    }
}

impl From<&Model> for WorkshopFields {
    fn from(m: &Model) -> Self {
        Self {
            name: m.name.clone(),
            description: m.description.clone(),
            location: m.location.clone(),
            starts_at: m.starts_at,
            is_vip: m.is_vip,
            max_capacity: m.max_capacity,
        }
    }
}

impl Model {
    pub async fn create(
        db: &DatabaseConnection,
        owner_id: i64,
        fields: WorkshopFields,
    ) -> Result<Model, DbErr> {
        let fields = fields.normalized();
        let now = Utc::now();

        ActiveModel {
            name: Set(fields.name),
            description: Set(fields.description),
            location: Set(fields.location),
            starts_at: Set(fields.starts_at),
            owner_id: Set(owner_id),
            is_vip: Set(fields.is_vip),
            max_capacity: Set(fields.max_capacity),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Overwrites the editable fields. Demoting a VIP workshop drops its VIP grants
    /// in the same transaction.
    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        fields: WorkshopFields,
    ) -> Result<Model, DbErr> {
        let fields = fields.normalized();
        let txn = db.begin().await?;

        let Some(existing) = Entity::find_by_id(id).one(&txn).await? else {
            return Err(DbErr::RecordNotFound(format!("Workshop {id} not found")));
        };

        if existing.is_vip && !fields.is_vip {
            super::vip_access::Entity::delete_many()
                .filter(super::vip_access::Column::WorkshopId.eq(id))
                .exec(&txn)
                .await?;
        }

        let mut active: ActiveModel = existing.into();
        active.name = Set(fields.name);
        active.description = Set(fields.description);
        active.location = Set(fields.location);
        active.starts_at = Set(fields.starts_at);
        active.is_vip = Set(fields.is_vip);
        active.max_capacity = Set(fields.max_capacity);
        active.updated_at = Set(Utc::now());
        let updated = active.update(&txn).await?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes the workshop; attendance and VIP grants go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `false` if nothing matched.
    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn list_for_owner(db: &DatabaseConnection, owner_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_asc(Column::StartsAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Every workshop, for scanner stations picking where they stand.
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_asc(Column::StartsAt)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn count_for_owner<C: ConnectionTrait>(db: &C, owner_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .count(db)
            .await
    }

    pub async fn count_vip_for_owner(db: &DatabaseConnection, owner_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .filter(Column::IsVip.eq(true))
            .count(db)
            .await
    }
}
