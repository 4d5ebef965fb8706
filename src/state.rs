//! Application state shared across the health handlers.

use sea_orm::DatabaseConnection;

/// Shared state handed to axum handlers.
///
/// `DatabaseConnection` is a pool handle, so clones share the same connections.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
