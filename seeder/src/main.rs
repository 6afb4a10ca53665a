use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    attendance::AttendanceSeeder, guest::GuestSeeder, user::UserSeeder,
    vip_access::VipAccessSeeder, workshop::WorkshopSeeder,
};
use api::auth::generate_jwt;
use colored::*;
use db::models::user;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await.expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(WorkshopSeeder), "Workshop"),
        (Box::new(GuestSeeder), "Guest"),
        (Box::new(VipAccessSeeder), "VipAccess"),
        (Box::new(AttendanceSeeder), "Attendance"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }

    // Handy bearer tokens for trying the API against the seeded data.
    for username in [seeds::ADMIN, seeds::SCANNERS[0]] {
        if let Ok(Some(account)) = user::Model::find_by_username(&db, username).await {
            let (token, expires) = generate_jwt(account.id, account.role);
            println!("\n{} ({}) token, expires {}:\n{}", username.bold(), account.role, expires, token);
        }
    }
}
