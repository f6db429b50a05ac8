use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Future returned by a [`with_txn`] body; it may borrow the transaction.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 'a>>;

/// Run `f` inside a fresh transaction: commit on `Ok`, roll back on `Err`.
///
/// The closure must own what it captures (clone ids and services in);
/// only the transaction is borrowed.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Rollback failure is ignored; the closure error wins
            if let Err(rb) = txn.rollback().await {
                tracing::warn!(error = %rb, "rollback failed");
            }
            Err(err)
        }
    }
}
