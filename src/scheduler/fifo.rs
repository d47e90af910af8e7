/*!
 * FIFO Scheduler
 * Runs processes to completion in definition order
 */

use super::engine::Engine;
use super::traits::Scheduler;
use super::types::Policy;

/// First in, first out
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl Scheduler for Fifo {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn schedule(&self, engine: &mut Engine<'_>) {
        for id in engine.process_ids() {
            engine.run_to_completion(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tolerance::approx_eq;
    use crate::process::{IoEvent, ProcessDefinition};
    use crate::scheduler::engine::simulate;
    use crate::scheduler::events::NullSink;

    #[test]
    fn test_cpu_only_runs_back_to_back() {
        let defs = vec![
            ProcessDefinition::cpu_bound("A", 10.0).unwrap(),
            ProcessDefinition::cpu_bound("B", 15.0).unwrap(),
            ProcessDefinition::cpu_bound("C", 20.0).unwrap(),
        ];
        let outcome = simulate(&Fifo, &defs, &mut NullSink);

        let elapsed: Vec<f64> = outcome.records.iter().map(|r| r.elapsed).collect();
        let first_run: Vec<f64> = outcome.records.iter().map(|r| r.first_run).collect();
        assert_eq!(elapsed, vec![10.0, 25.0, 45.0]);
        assert_eq!(first_run, vec![0.0, 10.0, 25.0]);
        assert_eq!(outcome.makespan, 45.0);
    }

    #[test]
    fn test_io_blocks_delay_the_next_process() {
        let defs = vec![
            ProcessDefinition::new("A", 2.0, vec![IoEvent::new(1.0, 3.0)]).unwrap(),
            ProcessDefinition::cpu_bound("B", 1.0).unwrap(),
        ];
        let outcome = simulate(&Fifo, &defs, &mut NullSink);

        assert!(approx_eq(outcome.records[0].elapsed, 5.0));
        assert!(approx_eq(outcome.records[0].blocked, 3.0));
        assert!(approx_eq(outcome.records[1].first_run, 5.0));
        assert!(approx_eq(outcome.records[1].elapsed, 6.0));
    }
}
