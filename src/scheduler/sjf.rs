/*!
 * Shortest Job First
 * Non-preemptive, ordered once by initial CPU demand
 */

use super::engine::Engine;
use super::traits::Scheduler;
use super::types::Policy;

/// Non-preemptive SJF
///
/// Ordering uses total demand, not remaining demand, and is decided before
/// the first dispatch. Equal demands keep definition order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl Scheduler for ShortestJobFirst {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn schedule(&self, engine: &mut Engine<'_>) {
        let mut order = engine.process_ids();
        // sort_by is stable
        order.sort_by(|&a, &b| {
            engine
                .definition(a)
                .total_cpu()
                .total_cmp(&engine.definition(b).total_cpu())
        });

        for id in order {
            engine.run_to_completion(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessDefinition;
    use crate::scheduler::engine::simulate;
    use crate::scheduler::events::NullSink;

    fn cpu_bound(demands: &[(&str, f64)]) -> Vec<ProcessDefinition> {
        demands.iter()
            .map(|&(name, total)| ProcessDefinition::cpu_bound(name, total).unwrap())
            .collect()
    }

    #[test]
    fn test_shortest_demand_runs_first() {
        let defs = cpu_bound(&[("A", 5.0), ("B", 10.0), ("C", 4.0), ("D", 2.0), ("E", 3.0), ("F", 15.0)]);
        let outcome = simulate(&ShortestJobFirst, &defs, &mut NullSink);

        let order: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        let elapsed: Vec<f64> = outcome.records.iter().map(|r| r.elapsed).collect();
        assert_eq!(order, vec!["D", "E", "C", "A", "B", "F"]);
        assert_eq!(elapsed, vec![2.0, 5.0, 9.0, 14.0, 24.0, 39.0]);
    }

    #[test]
    fn test_ties_keep_definition_order() {
        let defs = cpu_bound(&[("X", 3.0), ("Y", 1.0), ("Z", 3.0), ("W", 1.0)]);
        let outcome = simulate(&ShortestJobFirst, &defs, &mut NullSink);

        let order: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["Y", "W", "X", "Z"]);
    }
}
