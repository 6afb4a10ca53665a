pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Builds a connection URL from `DATABASE_PATH` and connects.
///
/// A value that already looks like a DSN is used as-is; anything else is treated as a
/// SQLite file path whose parent directory gets created on demand.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = database_url(&config::database_path());
    tracing::debug!(%url, "Connecting to database");
    Database::connect(&url).await
}

pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:") {
        return path_or_url.to_owned();
    }

    // SQLite won't create intermediate dirs.
    if let Some(parent) = Path::new(path_or_url).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}
