pub mod txn;

use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// The canonical way for application code to reach the database. Fails with
/// `DB_UNAVAILABLE` when the state was built without one.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("Database is not configured"))
}
