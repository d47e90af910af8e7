/*!
 * Metrics Aggregation
 * Averages per-process records across repeated runs
 */

use super::record::MetricsRecord;
use crate::core::errors::MetricsError;
use ahash::RandomState;
use std::collections::HashMap;

/// Accumulates runs of one (policy, workload) pair
///
/// Records are matched by process name. Output order is the order of the
/// first run added.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    sums: Vec<MetricsRecord>,
    index: HashMap<String, usize, RandomState>,
    runs: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of runs added so far
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Add one run; rejected runs leave the aggregator unchanged
    pub fn add_run(&mut self, records: &[MetricsRecord]) -> Result<(), MetricsError> {
        if self.runs == 0 {
            self.sums = records.to_vec();
            self.index = records
                .iter()
                .enumerate()
                .map(|(i, r)| (r.name.as_str().to_string(), i))
                .collect();
            self.runs = 1;
            return Ok(());
        }

        if records.len() != self.sums.len() {
            return Err(MetricsError::SizeMismatch {
                run: self.runs,
                expected: self.sums.len(),
                found: records.len(),
            });
        }

        let mut slots = Vec::with_capacity(records.len());
        for record in records {
            match self.index.get(record.name.as_str()) {
                Some(&slot) => slots.push(slot),
                None => {
                    return Err(MetricsError::MissingProcess {
                        name: record.name.clone(),
                        run: self.runs,
                    })
                }
            }
        }

        for (record, slot) in records.iter().zip(slots) {
            let sum = &mut self.sums[slot];
            sum.elapsed += record.elapsed;
            sum.cpu += record.cpu;
            sum.blocked += record.blocked;
            sum.first_run += record.first_run;
        }
        self.runs += 1;
        Ok(())
    }

    /// Arithmetic mean of every field, one record per process
    pub fn average(&self) -> Result<Vec<MetricsRecord>, MetricsError> {
        if self.runs == 0 {
            return Err(MetricsError::NoRuns);
        }
        let n = self.runs as f64;
        Ok(self
            .sums
            .iter()
            .map(|sum| MetricsRecord {
                name: sum.name.clone(),
                elapsed: sum.elapsed / n,
                cpu: sum.cpu / n,
                blocked: sum.blocked / n,
                first_run: sum.first_run / n,
            })
            .collect())
    }
}

/// Average a set of runs in one call
pub fn average_runs<R>(runs: &[R]) -> Result<Vec<MetricsRecord>, MetricsError>
where
    R: AsRef<[MetricsRecord]>,
{
    let mut aggregator = Aggregator::new();
    for run in runs {
        aggregator.add_run(run.as_ref())?;
    }
    aggregator.average()
}
