/*!
 * Metrics Record
 * Per-process timing measurements from one completed run
 */

use crate::core::name::ProcName;
use crate::core::types::{CpuTime, SimTime};
use serde::{Deserialize, Serialize};

/// Lifetime metrics of one process in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricsRecord {
    pub name: ProcName,
    /// Finish time on the virtual clock
    pub elapsed: SimTime,
    /// CPU consumed; equals total demand once finished
    pub cpu: CpuTime,
    /// Time spent blocked on I/O
    pub blocked: SimTime,
    /// Clock value at first dispatch
    pub first_run: SimTime,
}

impl MetricsRecord {
    /// Time spent ready but not running
    #[inline]
    pub fn waiting(&self) -> SimTime {
        self.elapsed - self.cpu - self.blocked
    }
}
