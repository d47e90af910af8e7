/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::name::ProcName;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-wide result alias
pub type SimResult<T> = Result<T, SimError>;

/// Invalid run configuration, detected before any simulation work starts
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Unknown policy '{0}'")]
    #[diagnostic(
        code(config::unknown_policy),
        help("Valid policies: fifo, sjf, rr, mlfq.")
    )]
    UnknownPolicy(String),

    #[error("Unknown scenario '{0}'")]
    #[diagnostic(
        code(config::unknown_scenario),
        help("Built-in scenarios are numbered 1 to 4. Run `schedsim scenarios` to list them.")
    )]
    UnknownScenario(String),

    #[error("Invalid quantum: {0}")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("The quantum must be a finite number of time units greater than zero.")
    )]
    InvalidQuantum(f64),

    #[error("Invalid MLFQ level count: {0}")]
    #[diagnostic(
        code(config::invalid_levels),
        help("MLFQ needs at least one queue level.")
    )]
    InvalidLevels(usize),
}

/// Malformed process definitions or workloads
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum WorkloadError {
    #[error("Workload '{0}' has no processes")]
    #[diagnostic(
        code(workload::empty),
        help("A scenario must define at least one process.")
    )]
    Empty(String),

    #[error("Process name must not be empty")]
    #[diagnostic(code(workload::empty_name))]
    EmptyName,

    #[error("Duplicate process name '{0}'")]
    #[diagnostic(
        code(workload::duplicate_name),
        help("Process names identify records across runs and must be unique.")
    )]
    DuplicateName(ProcName),

    #[error("Process '{name}' has invalid CPU demand {demand}")]
    #[diagnostic(
        code(workload::invalid_demand),
        help("Total CPU demand must be finite and greater than zero.")
    )]
    InvalidDemand { name: ProcName, demand: f64 },

    #[error("Process '{name}': I/O event {index} at cpu {when_cpu} is outside [0, {total_cpu}]")]
    #[diagnostic(
        code(workload::io_out_of_range),
        help("I/O thresholds are measured in cumulative CPU and cannot exceed the total demand.")
    )]
    IoOutOfRange {
        name: ProcName,
        index: usize,
        when_cpu: f64,
        total_cpu: f64,
    },

    #[error("Process '{name}': I/O event {index} is not after the previous event")]
    #[diagnostic(
        code(workload::io_unordered),
        help("I/O thresholds must be strictly increasing.")
    )]
    IoUnordered { name: ProcName, index: usize },

    #[error("Process '{name}': I/O event {index} has invalid duration {duration}")]
    #[diagnostic(
        code(workload::io_duration),
        help("I/O durations must be finite and non-negative.")
    )]
    InvalidIoDuration {
        name: ProcName,
        index: usize,
        duration: f64,
    },
}

/// Failures while combining per-run metrics
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MetricsError {
    #[error("No runs to aggregate")]
    #[diagnostic(code(metrics::no_runs))]
    NoRuns,

    #[error("Run {run} has {found} records, expected {expected}")]
    #[diagnostic(
        code(metrics::size_mismatch),
        help("All runs being averaged must come from the same workload.")
    )]
    SizeMismatch {
        run: usize,
        expected: usize,
        found: usize,
    },

    #[error("Process '{name}' is missing from run {run}")]
    #[diagnostic(
        code(metrics::missing_process),
        help("All runs being averaged must come from the same workload.")
    )]
    MissingProcess { name: ProcName, run: usize },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Workload error: {0}")]
    #[diagnostic(transparent)]
    Workload(#[from] WorkloadError),

    #[error("Metrics error: {0}")]
    #[diagnostic(transparent)]
    Metrics(#[from] MetricsError),

    #[error("I/O error on '{path}'")]
    #[diagnostic(
        code(sim::io_error),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(
        code(sim::json_error),
        help("A workload file holds a label and a list of processes with name, total_cpu and io_events.")
    )]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Wrap an I/O error together with the path that caused it
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
