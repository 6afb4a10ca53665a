use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait};

/// Literal prefix of every scannable guest token.
pub const QR_PREFIX: &str = "guest-";

/// A registered attendee. `qr_code` is issued once at creation and never changes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, serde::Serialize)]
#[sea_orm(table_name = "guests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub qr_code: String,
    /// Informational only; VIP workshop entry is decided by `vip_access` grants.
    pub is_vip: bool,
    pub owner_id: i64,
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

/// Token printed into a guest's QR code.
pub fn qr_code_for(guest_id: i64) -> String {
    format!("{QR_PREFIX}{guest_id}")
}

/// Extracts the guest id from a scanned token.
///
/// Accepts exactly `guest-<positive decimal id>` as issued by [`qr_code_for`], so a
/// zero-padded id is rejected; anything else yields `None`.
pub fn parse_qr_code(token: &str) -> Option<i64> {
    let digits = token.strip_prefix(QR_PREFIX)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i64>().ok().filter(|id| *id > 0)
}

impl Model {
    /// Inserts the guest and stamps its QR token from the assigned id, atomically.
    pub async fn create(
        db: &DatabaseConnection,
        owner_id: i64,
        name: &str,
        email: &str,
        is_vip: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let txn = db.begin().await?;

        // The id isn't known until the row exists, so insert with a unique placeholder.
        let inserted = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            qr_code: Set(format!("pending-{}", uuid::Uuid::new_v4())),
            is_vip: Set(is_vip),
            owner_id: Set(owner_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let id = inserted.id;
        let mut active: ActiveModel = inserted.into();
        active.qr_code = Set(qr_code_for(id));
        let guest = active.update(&txn).await?;

        txn.commit().await?;
        Ok(guest)
    }

    /// Updates name, email and VIP flag. The QR token is left untouched.
    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        name: &str,
        email: &str,
        is_vip: bool,
    ) -> Result<Model, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Err(DbErr::RecordNotFound(format!("Guest {id} not found")));
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(name.to_owned());
        active.email = Set(email.to_owned());
        active.is_vip = Set(is_vip);
        active.updated_at = Set(Utc::now());
        active.update(db).await
    }

    /// Deletes the guest together with their attendance and VIP grants (FK cascade).
    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_by_qr_code<C: ConnectionTrait>(
        db: &C,
        qr_code: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::QrCode.eq(qr_code))
            .one(db)
            .await
    }

    pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    pub async fn list_for_owner(db: &DatabaseConnection, owner_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::OwnerId.eq(owner_id))
            .order_by_asc(Column::Name)
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
}
