use colored::*;
use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::{MigrationStatus, prelude::*};
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

async fn connect(url: &str) -> DatabaseConnection {
    Database::connect(url).await.unwrap_or_else(|err| {
        eprintln!("{} {err}", "Could not open database:".red());
        std::process::exit(1);
    })
}

/// Applies pending migrations one at a time so each gets its own status line.
pub async fn apply_pending(url: &str) {
    let db = connect(url).await;

    let pending = match Migrator::get_pending_migrations(&db).await {
        Ok(pending) => pending,
        Err(err) => {
            eprintln!("{} {err}", "Could not read migration table:".red());
            std::process::exit(1);
        }
    };

    if pending.is_empty() {
        println!("Schema is up to date.");
        return;
    }

    println!("Applying {} migration(s)...", pending.len());
    for migration in pending {
        let line = format!("Applying {}", migration.name().bold());
        print!("{}{} ", line, ".".repeat(STATUS_COLUMN.saturating_sub(line.len())));
        io::stdout().flush().ok();

        let start = Instant::now();
        match Migrator::up(&db, Some(1)).await {
            Ok(()) => println!("{} {}", "done".green(), format!("({:.2?})", start.elapsed()).dimmed()),
            Err(err) => {
                println!("{}", "failed".red());
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}

/// Prints every known migration with whether it has been applied.
pub async fn print_status(url: &str) {
    let db = connect(url).await;

    let migrations = match Migrator::get_migration_with_status(&db).await {
        Ok(migrations) => migrations,
        Err(err) => {
            eprintln!("{} {err}", "Could not read migration table:".red());
            std::process::exit(1);
        }
    };

    for migration in migrations {
        let status = match migration.status() {
            MigrationStatus::Applied => "applied".green(),
            MigrationStatus::Pending => "pending".yellow(),
        };
        let line = migration.name().to_string();
        println!("{}{} {}", line, ".".repeat(STATUS_COLUMN.saturating_sub(line.len())), status);
    }
}
