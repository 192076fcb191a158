//! Span instrumentation for profiling searches.
//!
//! Enable with `--features instrumentation`. Functions marked with
//! `cfg_attr(feature = "instrumentation", instrument(skip_all))` emit a span,
//! and closed spans are printed with their busy and idle time. `RUST_LOG`
//! selects which spans are shown.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber in place of `env_logger`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .init();
}
