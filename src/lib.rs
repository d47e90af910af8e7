/*!
 * Scheduling Simulator Library
 * Deterministic CPU scheduling simulation over synthetic workloads
 */

pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::*;
pub use crate::core::ProcName;
pub use metrics::{MetricsRecord, RunSummary};
pub use monitoring::init_tracing;
pub use process::{IoEvent, ProcessDefinition};
pub use runner::{RunReport, SimConfig, Simulation};
pub use scenario::{ScenarioId, ScenarioRef, Workload};
pub use scheduler::{EventLog, Policy, RunOutcome, SchedEvent, Scheduler, TimeQuantum};
