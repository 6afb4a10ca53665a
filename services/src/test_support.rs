use chrono::{TimeZone, Utc};
use db::models::{
    guest,
    user::{self, Role},
    workshop::{self, WorkshopFields},
};
use sea_orm::DatabaseConnection;

pub struct Staff {
    pub admin: user::Model,
    pub scanner: user::Model,
}

pub async fn staff(db: &DatabaseConnection) -> Staff {
    Staff {
        admin: user::Model::create(db, "admin", Role::Admin).await.unwrap(),
        scanner: user::Model::create(db, "door_1", Role::Scanner).await.unwrap(),
    }
}

pub fn open_fields(name: &str) -> WorkshopFields {
    WorkshopFields {
        name: name.to_owned(),
        description: None,
        location: Some("Main Hall".to_owned()),
        starts_at: Utc.with_ymd_and_hms(2025, 11, 3, 9, 0, 0).unwrap(),
        is_vip: false,
        max_capacity: None,
    }
}

pub fn vip_fields(name: &str, capacity: i32) -> WorkshopFields {
    WorkshopFields {
        is_vip: true,
        max_capacity: Some(capacity),
        ..open_fields(name)
    }
}

pub async fn open_workshop(db: &DatabaseConnection, owner_id: i64, name: &str) -> workshop::Model {
    workshop::Model::create(db, owner_id, open_fields(name))
        .await
        .unwrap()
}

pub async fn vip_workshop(
    db: &DatabaseConnection,
    owner_id: i64,
    name: &str,
    capacity: i32,
) -> workshop::Model {
    workshop::Model::create(db, owner_id, vip_fields(name, capacity))
        .await
        .unwrap()
}

pub async fn guest(db: &DatabaseConnection, owner_id: i64, name: &str) -> guest::Model {
    let email = format!("{}@example.com", name.to_lowercase());
    guest::Model::create(db, owner_id, name, &email, false)
        .await
        .unwrap()
}
