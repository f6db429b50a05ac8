//! Connection setup and schema bootstrap.

use std::future::Future;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{is_memory, redact, DbKind};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Pool options for `url`. In-memory SQLite is pinned to a single
/// connection so every query sees the same database.
fn connect_options(url: &str) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url.to_string());
    if is_memory(url) {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(10).min_connections(1);
    }
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    opts
}

/// Retry a connection attempt with fixed interval delays; returns the last
/// error once all attempts are used up.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt < max_attempts => {
                warn!(attempt, max_attempts, error = %e, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Open a pool for `url`. Does not run migrations.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let kind = DbKind::from_url(url)?;
    let attempts = if is_memory(url) { 1 } else { CONNECT_ATTEMPTS };

    retry_connection(
        move || async move {
            Database::connect(connect_options(url))
                .await
                .map_err(|e| AppError::db_unavailable(format!("connect to {kind:?} failed: {e}")))
        },
        attempts,
        CONNECT_RETRY_INTERVAL_MS,
    )
    .await
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    info!(url = %redact(url), "bootstrap=start");

    let conn = connect_db(url).await?;
    migration::migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    let version = migration::get_latest_migration_version(&conn)
        .await
        .map_err(AppError::from)?;
    info!(migration = version.as_deref().unwrap_or("none"), "bootstrap=ready");
    Ok(conn)
}
