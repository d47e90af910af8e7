/*!
 * Scheduler Traits
 * Interface between scheduling policies and the run engine
 */

use super::engine::Engine;
use super::fifo::Fifo;
use super::mlfq::Mlfq;
use super::round_robin::RoundRobin;
use super::sjf::ShortestJobFirst;
use super::types::Policy;
use crate::runner::SimConfig;
use std::fmt;

/// A scheduling policy
///
/// Implementations pick the next process and its budget, then call
/// `Engine::dispatch` until every process has finished.
pub trait Scheduler: fmt::Debug + Send + Sync {
    /// Policy this scheduler implements
    fn policy(&self) -> Policy;

    /// Drive `engine` until no process has work left
    fn schedule(&self, engine: &mut Engine<'_>);
}

impl Policy {
    /// Build the scheduler for this policy from a run configuration
    pub fn scheduler(&self, config: &SimConfig) -> Box<dyn Scheduler> {
        match self {
            Self::Fifo => Box::new(Fifo),
            Self::Sjf => Box::new(ShortestJobFirst),
            Self::RoundRobin => Box::new(RoundRobin::new(config.quantum)),
            Self::Mlfq => Box::new(Mlfq::new(config.quantum, config.mlfq_levels)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_builds_matching_scheduler() {
        let config = SimConfig::default();
        for policy in Policy::ALL {
            assert_eq!(policy.scheduler(&config).policy(), policy);
        }
    }
}
