/*!
 * Process Definitions
 * Immutable description of a process's CPU demand and I/O schedule
 */

use crate::core::errors::WorkloadError;
use crate::core::name::ProcName;
use crate::core::tolerance::EPSILON;
use crate::core::types::{CpuTime, SimTime};
use serde::{Deserialize, Serialize};

/// A blocking I/O request keyed to cumulative CPU consumed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IoEvent {
    /// CPU consumed at which the process blocks
    pub when_cpu: CpuTime,
    /// Time spent blocked
    pub duration: SimTime,
}

impl IoEvent {
    pub const fn new(when_cpu: CpuTime, duration: SimTime) -> Self {
        Self { when_cpu, duration }
    }
}

/// Validated process definition
///
/// Shared read-only across every run of a workload; runs never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessDefinition {
    name: ProcName,
    total_cpu: CpuTime,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    io_events: Vec<IoEvent>,
}

impl ProcessDefinition {
    /// Create a definition, checking demand and I/O ordering
    pub fn new(
        name: impl Into<ProcName>,
        total_cpu: CpuTime,
        io_events: Vec<IoEvent>,
    ) -> Result<Self, WorkloadError> {
        let name = name.into();
        if name.is_empty() {
            return Err(WorkloadError::EmptyName);
        }

        if !total_cpu.is_finite() || total_cpu <= EPSILON {
            return Err(WorkloadError::InvalidDemand {
                name,
                demand: total_cpu,
            });
        }

        let mut previous: Option<CpuTime> = None;
        for (index, event) in io_events.iter().enumerate() {
            if !event.when_cpu.is_finite() || event.when_cpu < 0.0 || event.when_cpu > total_cpu {
                return Err(WorkloadError::IoOutOfRange {
                    name,
                    index,
                    when_cpu: event.when_cpu,
                    total_cpu,
                });
            }
            if !event.duration.is_finite() || event.duration < 0.0 {
                return Err(WorkloadError::InvalidIoDuration {
                    name,
                    index,
                    duration: event.duration,
                });
            }
            if previous.is_some_and(|prev| event.when_cpu <= prev) {
                return Err(WorkloadError::IoUnordered { name, index });
            }
            previous = Some(event.when_cpu);
        }

        Ok(Self {
            name,
            total_cpu,
            io_events,
        })
    }

    /// CPU-only process
    pub fn cpu_bound(name: impl Into<ProcName>, total_cpu: CpuTime) -> Result<Self, WorkloadError> {
        Self::new(name, total_cpu, Vec::new())
    }

    #[inline]
    pub fn name(&self) -> &ProcName {
        &self.name
    }

    #[inline]
    pub fn total_cpu(&self) -> CpuTime {
        self.total_cpu
    }

    #[inline]
    pub fn io_events(&self) -> &[IoEvent] {
        &self.io_events
    }

    /// Sum of all I/O durations (the blocked time of a completed run)
    pub fn total_io(&self) -> SimTime {
        self.io_events.iter().map(|e| e.duration).sum()
    }
}

/// Unvalidated wire form used by workload files
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawDefinition {
    pub name: String,
    pub total_cpu: CpuTime,
    #[serde(default)]
    pub io_events: Vec<IoEvent>,
}

impl TryFrom<RawDefinition> for ProcessDefinition {
    type Error = WorkloadError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.total_cpu, raw.io_events)
    }
}

impl<'de> Deserialize<'de> for ProcessDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDefinition::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
