pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod pointstreak;
pub mod store;
pub mod sync;

use tracing_subscriber::EnvFilter;

/// Output format for the process-wide tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, no timestamps or colors. CloudWatch stamps each line itself.
    Json,
    /// Human readable lines for local runs.
    Pretty,
}

/// Initialize structured logging with tracing. Honors `RUST_LOG`, defaulting to `info`.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    // try_init so a second call (tests, repeated init) is harmless
    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_current_span(false)
            .with_ansi(false)
            .without_time()
            .try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}
