use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

/// Permission for one guest to enter one VIP workshop.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "vip_access")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub guest_id: i64,
    pub workshop_id: i64,
    pub granted_at: DateTime<Utc>,
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

impl Model {
    pub async fn insert<C: ConnectionTrait>(
        db: &C,
        guest_id: i64,
        workshop_id: i64,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            guest_id: Set(guest_id),
            workshop_id: Set(workshop_id),
            granted_at: Set(Utc::now()),
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

    pub async fn exists_for<C: ConnectionTrait>(
        db: &C,
        guest_id: i64,
        workshop_id: i64,
    ) -> Result<bool, DbErr> {
        Ok(Self::find_for(db, guest_id, workshop_id).await?.is_some())
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

    /// Returns whether a grant was actually removed.
    pub async fn delete_for(
        db: &DatabaseConnection,
        guest_id: i64,
        workshop_id: i64,
    ) -> Result<bool, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::GuestId.eq(guest_id))
            .filter(Column::WorkshopId.eq(workshop_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    /// Guests holding a grant for the workshop, by name.
    pub async fn guests_for_workshop(
        db: &DatabaseConnection,
        workshop_id: i64,
    ) -> Result<Vec<super::guest::Model>, DbErr> {
        super::guest::Entity::find()
            .join(JoinType::InnerJoin, super::guest::Relation::VipAccess.def())
            .filter(Column::WorkshopId.eq(workshop_id))
            .order_by_asc(super::guest::Column::Name)
            .order_by_asc(super::guest::Column::Id)
            .all(db)
            .await
    }

    /// Workshops the guest holds a grant for, by start time.
    pub async fn workshops_for_guest(
        db: &DatabaseConnection,
        guest_id: i64,
    ) -> Result<Vec<super::workshop::Model>, DbErr> {
        super::workshop::Entity::find()
            .join(JoinType::InnerJoin, super::workshop::Relation::VipAccess.def())
            .filter(Column::GuestId.eq(guest_id))
            .order_by_asc(super::workshop::Column::StartsAt)
            .order_by_asc(super::workshop::Column::Id)
            .all(db)
            .await
    }
}
