//! Per-game async locks serializing moves on the same game.
//!
//! An entry lives only while some move holds or awaits it; the last guard
//! to drop removes it, so unknown ids and abandoned games leave nothing behind.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<String, Arc<Mutex<()>>>;

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: LockMap,
}

/// Exclusive access to one game. Dropping it releases the mutex and evicts
/// the registry entry when nobody else is queued on it.
#[derive(Debug)]
pub struct GameLockGuard<'a> {
    locks: &'a LockMap,
    game_id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `game_id`.
    pub async fn acquire(&self, game_id: &str) -> GameLockGuard<'_> {
        // Clone the Arc out so no map shard stays locked across the await.
        let lock = self
            .locks
            .entry(game_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;
        GameLockGuard {
            locks: &self.locks,
            game_id: game_id.to_string(),
            guard: Some(guard),
        }
    }

    /// Number of games that currently have a lock entry.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

impl Drop for GameLockGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Waiters hold their own clone; `entry()` clones under the shard
        // lock, so nobody can pick up the Arc between this check and removal.
        self.locks
            .remove_if(&self.game_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
