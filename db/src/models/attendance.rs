use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{
    FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;

/// One check-in of a guest at a workshop. Unique per (guest, workshop); never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub guest_id: i64,
    pub workshop_id: i64,
    pub checked_in_at: DateTime<Utc>,
    /// Staff user who scanned the guest; null once that account is removed.
    pub recorded_by: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guest::Entity",
        from = "Column::GuestId",
        to = "super::guest::Column::Id",
        on_delete = "Cascade"
    )]
    Guest,
    #[sea_orm(
        belongs_to = "super::workshop::Entity",
        from = "Column::WorkshopId",
        to = "super::workshop::Column::Id",
        on_delete = "Cascade"
    )]
    Workshop,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RecordedBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    RecordedBy,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl Related<super::workshop::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workshop.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// An attendance row joined with the guest and workshop names.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct CheckInWithNames {
    pub id: i64,
    pub guest_id: i64,
    pub guest_name: String,
    pub workshop_id: i64,
    pub workshop_name: String,
    pub checked_in_at: DateTime<Utc>,
    pub recorded_by: Option<i64>,
}

impl Model {
    pub async fn insert<C: ConnectionTrait>(
        db: &C,
        guest_id: i64,
        workshop_id: i64,
        recorded_by: Option<i64>,
        checked_in_at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            guest_id: Set(guest_id),
            workshop_id: Set(workshop_id),
            checked_in_at: Set(checked_in_at),
            recorded_by: Set(recorded_by),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_for<C: ConnectionTrait>(
        db: &C,
        guest_id: i64,
        workshop_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::GuestId.eq(guest_id))
            .filter(Column::WorkshopId.eq(workshop_id))
            .one(db)
            .await
    }

    pub async fn count_for_workshop<C: ConnectionTrait>(
        db: &C,
        workshop_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::WorkshopId.eq(workshop_id))
            .count(db)
            .await
    }

    pub async fn count_for_guest<C: ConnectionTrait>(db: &C, guest_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .filter(Column::GuestId.eq(guest_id))
            .count(db)
            .await
    }

    /// Workshops of `owner_id` that `guest_id` checked into.
    pub async fn count_for_guest_in_owner_scope<C: ConnectionTrait>(
        db: &C,
        guest_id: i64,
        owner_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Workshop.def())
            .filter(Column::GuestId.eq(guest_id))
            .filter(super::workshop::Column::OwnerId.eq(owner_id))
            .count(db)
            .await
    }

    /// Guests of `owner_id` that checked into `workshop_id`.
    pub async fn count_for_workshop_in_owner_scope<C: ConnectionTrait>(
        db: &C,
        workshop_id: i64,
        owner_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Guest.def())
            .filter(Column::WorkshopId.eq(workshop_id))
            .filter(super::guest::Column::OwnerId.eq(owner_id))
            .count(db)
            .await
    }

    /// Every check-in into a workshop owned by `owner_id`.
    pub async fn count_for_owner<C: ConnectionTrait>(db: &C, owner_id: i64) -> Result<u64, DbErr> {
        Entity::find()
            .join(JoinType::InnerJoin, Relation::Workshop.def())
            .filter(super::workshop::Column::OwnerId.eq(owner_id))
            .count(db)
            .await
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    fn with_names() -> Select<Entity> {
        Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::GuestId)
            .column_as(super::guest::Column::Name, "guest_name")
            .column(Column::WorkshopId)
            .column_as(super::workshop::Column::Name, "workshop_name")
            .column(Column::CheckedInAt)
            .column(Column::RecordedBy)
            .join(JoinType::InnerJoin, Relation::Guest.def())
            .join(JoinType::InnerJoin, Relation::Workshop.def())
            .order_by_desc(Column::CheckedInAt)
            .order_by_desc(Column::Id)
    }

    /// The `limit` newest check-ins across all workshops, newest first.
    pub async fn recent(db: &DatabaseConnection, limit: u64) -> Result<Vec<CheckInWithNames>, DbErr> {
        Self::with_names()
            .limit(limit)
            .into_model::<CheckInWithNames>()
            .all(db)
            .await
    }

    /// Check-ins for one workshop, newest first.
    pub async fn list_for_workshop(
        db: &DatabaseConnection,
        workshop_id: i64,
    ) -> Result<Vec<CheckInWithNames>, DbErr> {
        Self::with_names()
            .filter(Column::WorkshopId.eq(workshop_id))
            .into_model::<CheckInWithNames>()
            .all(db)
            .await
    }

    /// Check-ins for one guest, newest first.
    pub async fn list_for_guest(
        db: &DatabaseConnection,
        guest_id: i64,
    ) -> Result<Vec<CheckInWithNames>, DbErr> {
        Self::with_names()
            .filter(Column::GuestId.eq(guest_id))
            .into_model::<CheckInWithNames>()
            .all(db)
            .await
    }
}
