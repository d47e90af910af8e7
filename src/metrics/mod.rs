/*!
 * Metrics Module
 * Per-process records, multi-run averaging, and run summaries
 */

pub mod aggregate;
pub mod record;
pub mod summary;

pub use aggregate::{average_runs, Aggregator};
pub use record::MetricsRecord;
pub use summary::RunSummary;
