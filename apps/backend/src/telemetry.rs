//! Process-wide tracing setup for binaries embedding the backend.

use tracing::Subscriber;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// JSON subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn subscriber() -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json()
        .with_current_span(true)
        .with_span_list(false);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer)
}

/// Install [`subscriber`] as the global default.
///
/// Fails if another global subscriber is already set.
pub fn try_init_tracing() -> Result<(), TryInitError> {
    subscriber().try_init()
}

/// Install [`subscriber`] as the global default, ignoring an existing one.
pub fn init_tracing() {
    let _ = try_init_tracing();
}
