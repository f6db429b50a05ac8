//! Backend test support utilities
//!
//! Shared by the backend's integration tests: unified logging
//! initialization, a freshly migrated in-memory database per test, and
//! assertions for the problem-details error contract.

pub mod db;
pub mod logging;
pub mod problem_details;
