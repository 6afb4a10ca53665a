use std::{env, fs, path::Path};

mod runner;

const DEFAULT_DATABASE_PATH: &str = "data/attendance.db";

/// `migration [up|fresh|clean|status]`, defaulting to `up`.
#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.into());
    let url = format!("sqlite://{db_path}?mode=rwc");

    match env::args().nth(1).as_deref().unwrap_or("up") {
        "clean" => drop_database(&db_path),
        "fresh" => {
            drop_database(&db_path);
            ensure_parent_dir(&db_path);
            runner::apply_pending(&url).await;
        }
        "status" => runner::print_status(&url).await,
        "up" => {
            ensure_parent_dir(&db_path);
            runner::apply_pending(&url).await;
        }
        other => {
            eprintln!("Unknown command '{other}'. Expected one of: up, fresh, clean, status");
            std::process::exit(2);
        }
    }
}

fn drop_database(path: &str) {
    let file = Path::new(path);
    if !file.exists() {
        println!("Nothing to delete at {}", file.display());
        return;
    }
    if let Err(err) = fs::remove_file(file) {
        eprintln!("Could not delete {}: {err}", file.display());
        std::process::exit(1);
    }
    println!("Deleted {}", file.display());
}

fn ensure_parent_dir(path: &str) {
    if let Some(parent) = Path::new(path).parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Could not create {}: {err}", parent.display());
            std::process::exit(1);
        }
    }
}
