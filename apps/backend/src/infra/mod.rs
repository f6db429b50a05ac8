//! Infrastructure layer - database bootstrap, state assembly and per-game locking.

pub mod db;
pub mod game_locks;
pub mod state;
