//! Throwaway databases for integration tests.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Connect to a private in-memory SQLite database and apply all migrations.
///
/// The pool is pinned to a single connection: every SQLite `:memory:`
/// connection is its own database, so a second pooled connection would see
/// an empty schema.
pub async fn memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None)
        .await
        .expect("apply migrations to in-memory sqlite");
    db
}
