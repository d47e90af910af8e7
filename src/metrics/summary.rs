/*!
 * Run Summary
 * Derived scheduling quality figures for a set of records
 */

use super::record::MetricsRecord;
use crate::core::types::SimTime;
use serde::{Deserialize, Serialize};

/// Aggregate view of one record set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunSummary {
    pub processes: usize,
    /// Mean finish time (all processes arrive at zero)
    pub mean_turnaround: SimTime,
    /// Mean time to first dispatch
    pub mean_response: SimTime,
    /// Mean time spent ready but not running
    pub mean_waiting: SimTime,
    /// Latest finish time
    pub makespan: SimTime,
}

impl RunSummary {
    pub fn from_records(records: &[MetricsRecord]) -> Self {
        Self {
            processes: records.len(),
            mean_turnaround: mean(records.iter().map(|r| r.elapsed)),
            mean_response: mean(records.iter().map(|r| r.first_run)),
            mean_waiting: mean(records.iter().map(MetricsRecord::waiting)),
            makespan: records.iter().map(|r| r.elapsed).fold(0.0, f64::max),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
