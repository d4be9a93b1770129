//! Test logging initialization
//!
//! One subscriber per test process, installed on first call. Unit tests call
//! [`init`] from a `ctor` hook in the crate root; integration test binaries do
//! the same from their `common` module.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Level used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// Pick the filter directive: `TEST_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_TEST_FILTER`]. Blank values are skipped.
pub fn filter_directive(test_log: Option<&str>, rust_log: Option<&str>) -> String {
    [test_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or(DEFAULT_TEST_FILTER)
        .to_string()
}

/// Initialize logging for tests. Idempotent and race-safe.
///
/// `TEST_LOG=debug cargo test` shows every apply/undo of the transaction core.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let test_log = std::env::var("TEST_LOG").ok();
        let rust_log = std::env::var("RUST_LOG").ok();
        let directive = filter_directive(test_log.as_deref(), rust_log.as_deref());

        fmt()
            .with_env_filter(EnvFilter::new(directive))
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}
