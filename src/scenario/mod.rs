/*!
 * Scenario Module
 * Workloads: built-in scenarios and JSON workload files
 */

pub mod builtin;
pub mod loader;

pub use builtin::ScenarioId;
pub use loader::{load_workload, WorkloadFile};

use crate::core::errors::{ConfigError, SimResult, WorkloadError};
use crate::process::ProcessDefinition;
use ahash::RandomState;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Validated, immutable set of process definitions
///
/// Cheap to clone; every run shares the same definitions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workload {
    label: String,
    processes: Arc<[ProcessDefinition]>,
}

impl Workload {
    /// Create a workload; names must be unique and the set non-empty
    pub fn new(
        label: impl Into<String>,
        processes: Vec<ProcessDefinition>,
    ) -> Result<Self, WorkloadError> {
        let label = label.into();
        if processes.is_empty() {
            return Err(WorkloadError::Empty(label));
        }

        let mut seen: HashSet<&str, RandomState> = HashSet::default();
        for def in &processes {
            if !seen.insert(def.name().as_str()) {
                return Err(WorkloadError::DuplicateName(def.name().clone()));
            }
        }

        Ok(Self {
            label,
            processes: processes.into(),
        })
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn processes(&self) -> &[ProcessDefinition] {
        &self.processes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

/// Where a workload comes from, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioRef {
    Builtin(ScenarioId),
    File(PathBuf),
}

impl ScenarioRef {
    /// An integer selects a built-in scenario; a path to a `.json` file or
    /// anything containing a path separator is a workload file
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return u8::try_from(n)
                .ok()
                .and_then(ScenarioId::new)
                .map(Self::Builtin)
                .ok_or_else(|| ConfigError::UnknownScenario(trimmed.to_string()));
        }

        if looks_like_path(trimmed) {
            Ok(Self::File(PathBuf::from(input)))
        } else {
            Err(ConfigError::UnknownScenario(trimmed.to_string()))
        }
    }

    /// Materialize the workload
    pub fn load(&self) -> SimResult<Workload> {
        match self {
            Self::Builtin(id) => Ok(id.workload()?),
            Self::File(path) => load_workload(path),
        }
    }
}

fn looks_like_path(input: &str) -> bool {
    let has_separator = input.contains('/') || input.contains(std::path::MAIN_SEPARATOR);
    let is_json = Path::new(input)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    has_separator || is_json
}

impl fmt::Display for ScenarioRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(id) => write!(f, "{id}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
