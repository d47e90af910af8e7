/*!
 * Simulation Runner
 * Repeats runs of a workload under a policy and averages the results
 */

pub mod config;

pub use config::{SimConfig, SimConfigBuilder};

use crate::core::errors::SimResult;
use crate::metrics::{Aggregator, MetricsRecord, RunSummary};
use crate::scenario::Workload;
use crate::scheduler::{simulate, EventLog, EventSink, NullSink, Policy, RunOutcome, SchedulerStats};
use serde::Serialize;
use tracing::info;

/// Averaged result of one (policy, workload) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub policy: Policy,
    pub scenario: String,
    pub runs: usize,
    /// One averaged record per process, in the first run's completion order
    pub records: Vec<MetricsRecord>,
    pub summary: RunSummary,
    /// Counters of the last run
    pub stats: SchedulerStats,
}

/// Runs a workload under any policy with a fixed configuration
#[derive(Debug, Clone)]
pub struct Simulation {
    workload: Workload,
    config: SimConfig,
}

impl Simulation {
    pub fn new(workload: Workload, config: SimConfig) -> Self {
        Self { workload, config }
    }

    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// One complete run with events sent to `sink`
    pub fn run_once(&self, policy: Policy, sink: &mut dyn EventSink) -> RunOutcome {
        let scheduler = policy.scheduler(&self.config);
        let outcome = simulate(&*scheduler, self.workload.processes(), sink);
        info!(
            policy = policy.as_str(),
            scenario = self.workload.label(),
            processes = self.workload.len(),
            makespan = outcome.makespan,
            "run complete"
        );
        outcome
    }

    /// One run recorded into an event log
    pub fn run_traced(&self, policy: Policy) -> (RunOutcome, EventLog) {
        let mut log = EventLog::new();
        let outcome = self.run_once(policy, &mut log);
        (outcome, log)
    }

    /// `repeat` independent runs, averaged per process
    pub fn run(&self, policy: Policy) -> SimResult<RunReport> {
        let mut aggregator = Aggregator::new();
        let mut stats = SchedulerStats::default();

        for _ in 0..self.config.repeat {
            let outcome = self.run_once(policy, &mut NullSink);
            aggregator.add_run(&outcome.records)?;
            stats = outcome.stats;
        }

        let records = aggregator.average()?;
        Ok(RunReport {
            policy,
            scenario: self.workload.label().to_string(),
            runs: aggregator.runs(),
            summary: RunSummary::from_records(&records),
            records,
            stats,
        })
    }

    /// Every policy on the same workload
    pub fn compare(&self) -> SimResult<Vec<RunReport>> {
        Policy::ALL.iter().map(|&policy| self.run(policy)).collect()
    }
}
