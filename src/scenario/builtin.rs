/*!
 * Built-in Scenarios
 * The four reference workloads
 */

use super::Workload;
use crate::core::errors::WorkloadError;
use crate::process::{IoEvent, ProcessDefinition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Static description of one built-in process
struct Entry {
    name: &'static str,
    total_cpu: f64,
    /// `(when_cpu, duration)` pairs
    io: &'static [(f64, f64)],
}

const fn cpu(name: &'static str, total_cpu: f64) -> Entry {
    Entry {
        name,
        total_cpu,
        io: &[],
    }
}

const fn with_io(name: &'static str, total_cpu: f64, io: &'static [(f64, f64)]) -> Entry {
    Entry {
        name,
        total_cpu,
        io,
    }
}

const SCENARIO_1: &[Entry] = &[cpu("A", 10.0), cpu("B", 15.0), cpu("C", 20.0)];

const SCENARIO_2: &[Entry] = &[
    cpu("A", 5.0),
    cpu("B", 10.0),
    cpu("C", 4.0),
    cpu("D", 2.0),
    cpu("E", 3.0),
    cpu("F", 15.0),
];

const SCENARIO_3: &[Entry] = &[
    with_io("A", 5.0, &[(1.0, 0.5), (3.0, 0.7)]),
    with_io("B", 5.0, &[(2.0, 0.4)]),
    with_io("C", 5.0, &[(0.5, 0.2), (2.5, 1.0)]),
];

const SCENARIO_4: &[Entry] = &[
    with_io("A", 6.0, &[(1.2, 0.6), (4.0, 0.8)]),
    with_io("B", 6.0, &[(3.5, 0.5)]),
    with_io("C", 6.0, &[(0.8, 0.3), (2.0, 0.4), (4.5, 0.6)]),
];

/// Identifier of a built-in scenario, 1 through 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScenarioId(u8);

impl ScenarioId {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 4;

    pub fn new(id: u8) -> Option<Self> {
        (Self::FIRST..=Self::LAST).contains(&id).then_some(Self(id))
    }

    /// Every built-in scenario in order
    pub fn all() -> impl Iterator<Item = ScenarioId> {
        (Self::FIRST..=Self::LAST).map(Self)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// One-line description for listings
    pub const fn description(self) -> &'static str {
        match self.0 {
            1 => "three CPU-bound processes (10, 15, 20)",
            2 => "six CPU-bound processes (5, 10, 4, 2, 3, 15)",
            3 => "three processes of demand 5 with I/O",
            _ => "three processes of demand 6 with I/O",
        }
    }

    fn entries(self) -> &'static [Entry] {
        match self.0 {
            1 => SCENARIO_1,
            2 => SCENARIO_2,
            3 => SCENARIO_3,
            _ => SCENARIO_4,
        }
    }

    /// Build the validated workload for this scenario
    pub fn workload(self) -> Result<Workload, WorkloadError> {
        let processes = self
            .entries()
            .iter()
            .map(|e| {
                let io = e.io.iter().map(|&(when, duration)| IoEvent::new(when, duration));
                ProcessDefinition::new(e.name, e.total_cpu, io.collect())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Workload::new(self.0.to_string(), processes)
    }
}

impl TryFrom<u8> for ScenarioId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or_else(|| format!("unknown scenario {id}"))
    }
}

impl From<ScenarioId> for u8 {
    fn from(id: ScenarioId) -> Self {
        id.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_range() {
        assert!(ScenarioId::new(0).is_none());
        assert!(ScenarioId::new(5).is_none());
        assert_eq!(ScenarioId::all().count(), 4);
        assert!(serde_json::from_str::<ScenarioId>("9").is_err());
    }

    #[test]
    fn test_every_builtin_is_valid() {
        for id in ScenarioId::all() {
            let workload = id.workload().unwrap();
            assert_eq!(workload.label(), id.to_string());
            assert!(!workload.is_empty());
        }
    }

    #[test]
    fn test_scenario_two_demands() {
        let workload = ScenarioId::new(2).unwrap().workload().unwrap();
        let demands: Vec<f64> = workload.processes().iter().map(|p| p.total_cpu()).collect();
        assert_eq!(demands, vec![5.0, 10.0, 4.0, 2.0, 3.0, 15.0]);
    }

    #[test]
    fn test_scenario_four_io_schedule() {
        let workload = ScenarioId::new(4).unwrap().workload().unwrap();
        let c = &workload.processes()[2];
        assert_eq!(c.name(), "C");
        assert_eq!(
            c.io_events(),
            &[IoEvent::new(0.8, 0.3), IoEvent::new(2.0, 0.4), IoEvent::new(4.5, 0.6)]
        );
    }
}
