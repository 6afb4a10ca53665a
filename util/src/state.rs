//! Application state container shared across Axum route handlers and services.
//!
//! Holds the database handle. Services receive the handle explicitly from here;
//! nothing in the workspace reaches for a global connection.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an already-connected (and migrated) database.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Services own their handle, so this is what gets passed to their constructors.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
