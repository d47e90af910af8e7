/*!
 * Workload Loader
 * JSON workload files
 */

use super::Workload;
use crate::core::errors::{SimError, SimResult};
use crate::process::ProcessDefinition;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// On-disk workload format
///
/// ```json
/// { "label": "mixed",
///   "processes": [
///     { "name": "A", "total_cpu": 5.0,
///       "io_events": [{ "when_cpu": 1.0, "duration": 0.5 }] } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkloadFile {
    /// Defaults to the file stem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub processes: Vec<ProcessDefinition>,
}

impl WorkloadFile {
    /// Validate into a workload, labelling it `fallback` if unlabelled
    pub fn into_workload(self, fallback: &str) -> SimResult<Workload> {
        let label = self.label.unwrap_or_else(|| fallback.to_string());
        Ok(Workload::new(label, self.processes)?)
    }
}

impl From<&Workload> for WorkloadFile {
    fn from(workload: &Workload) -> Self {
        Self {
            label: Some(workload.label().to_string()),
            processes: workload.processes().to_vec(),
        }
    }
}

/// Read and validate a workload file
pub fn load_workload(path: impl AsRef<Path>) -> SimResult<Workload> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| SimError::io(&shown, e))?;
    let file: WorkloadFile = serde_json::from_str(&text)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("workload");
    let workload = file.into_workload(stem)?;

    info!(path = %shown, label = workload.label(), processes = workload.len(), "workload loaded");
    Ok(workload)
}
