/*!
 * Multi-Level Feedback Queue
 * Strict-priority levels with demotion on full quantum use
 */

use super::engine::Engine;
use super::traits::Scheduler;
use super::types::{Policy, TimeQuantum};
use crate::core::limits::DEFAULT_MLFQ_LEVELS;
use crate::core::tolerance::quantum_exhausted;
use crate::core::types::Level;
use crate::process::ProcId;
use std::collections::VecDeque;

/// FIFO queue per level, level 0 first
#[derive(Debug, Clone)]
struct LevelQueues {
    levels: Vec<VecDeque<ProcId>>,
}

impl LevelQueues {
    fn new(count: usize) -> Self {
        Self {
            levels: vec![VecDeque::new(); count.max(1)],
        }
    }

    #[inline]
    fn lowest(&self) -> Level {
        self.levels.len() - 1
    }

    fn push(&mut self, level: Level, id: ProcId) {
        let level = level.min(self.lowest());
        self.levels[level].push_back(id);
    }

    /// Head of the highest-priority non-empty level
    fn pop_highest(&mut self) -> Option<(Level, ProcId)> {
        self.levels
            .iter_mut()
            .enumerate()
            .find_map(|(level, queue)| queue.pop_front().map(|id| (level, id)))
    }
}

/// MLFQ without priority boost
///
/// A process that uses its whole quantum moves one level down (the lowest
/// level keeps it). A process cut short by an I/O boundary keeps its level.
/// Nothing ever moves up.
#[derive(Debug, Clone, Copy)]
pub struct Mlfq {
    quantum: TimeQuantum,
    levels: usize,
}

impl Mlfq {
    /// `levels` below one is treated as one
    pub fn new(quantum: TimeQuantum, levels: usize) -> Self {
        Self {
            quantum,
            levels: levels.max(1),
        }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }

    pub fn levels(&self) -> usize {
        self.levels
    }
}

impl Default for Mlfq {
    fn default() -> Self {
        Self::new(TimeQuantum::default(), DEFAULT_MLFQ_LEVELS)
    }
}

impl Scheduler for Mlfq {
    fn policy(&self) -> Policy {
        Policy::Mlfq
    }

    fn schedule(&self, engine: &mut Engine<'_>) {
        let quantum = self.quantum.get();
        let mut queues = LevelQueues::new(self.levels);
        for id in engine.process_ids() {
            queues.push(0, id);
        }

        while let Some((level, id)) = queues.pop_highest() {
            let outcome = engine.dispatch(id, quantum, level);
            if outcome.done {
                continue;
            }

            let next = if quantum_exhausted(outcome.slice.taken, quantum) {
                (level + 1).min(queues.lowest())
            } else {
                level
            };
            if next != level {
                engine.record_demotion(id, level, next);
            }
            queues.push(next, id);
        }
    }
}
