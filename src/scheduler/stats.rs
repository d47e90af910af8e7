/*!
 * Scheduler Statistics
 * Per-run counters collected by the engine
 */

use crate::core::types::{CpuTime, SimTime};
use serde::{Deserialize, Serialize};

/// Scheduler statistics for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    pub dispatches: u64,
    /// Dispatches of a process other than the previously dispatched one
    pub context_switches: u64,
    /// Slices that used the full quantum without finishing
    pub quantum_expiries: u64,
    pub io_blocks: u64,
    pub demotions: u64,
    pub completed: u64,
    pub total_cpu: CpuTime,
    pub total_blocked: SimTime,
}

impl SchedulerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of simulated time spent on the CPU
    pub fn cpu_utilization(&self) -> f64 {
        let span = self.total_cpu + self.total_blocked;
        if span > 0.0 {
            self.total_cpu / span
        } else {
            0.0
        }
    }
}
