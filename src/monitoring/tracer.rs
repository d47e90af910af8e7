/*!
 * Tracing Setup
 * Structured logging for simulator runs using the tracing crate
 *
 * Logs go to stderr so result tables on stdout stay clean.
 */

use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that switches output to JSON lines
pub const TRACE_JSON_ENV: &str = "SCHEDSIM_TRACE_JSON";

/// Default filter when RUST_LOG is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - SCHEDSIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json_requested() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("tracing initialized");
    }
}

fn json_requested() -> bool {
    std::env::var(TRACE_JSON_ENV)
        .map(|v| parse_flag(&v))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true")
}
