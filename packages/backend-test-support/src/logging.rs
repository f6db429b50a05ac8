//! Test logging bootstrap shared by every backend test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Quiet default: engine warnings only, and the SQL layers stay silent.
const DEFAULT_FILTER: &str = "warn,sqlx=off,sea_orm=off";

/// Install the tracing subscriber for tests, at most once per process.
///
/// Filter precedence: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
/// Output goes through the libtest writer so captured tests stay quiet and
/// failing tests show their logs. Safe to call from any number of tests; if
/// another subscriber is already global this is a no-op.
///
/// ```bash
/// TEST_LOG=mancala_backend=debug cargo test -p mancala-backend
/// ```
pub fn init() {
    INSTALLED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init();
    });
}
