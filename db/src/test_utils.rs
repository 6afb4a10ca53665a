use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Fresh, fully migrated in-memory database.
///
/// Pinned to a single pooled connection: every new SQLite `:memory:` connection
/// would otherwise see its own empty database. Callers holding a transaction must
/// run all queries through it.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to open in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to migrate in-memory database");

    db
}
