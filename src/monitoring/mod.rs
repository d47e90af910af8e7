/*!
 * Monitoring
 * Structured logging setup
 */

mod tracer;

pub use tracer::{init_tracing, DEFAULT_FILTER, TRACE_JSON_ENV};
