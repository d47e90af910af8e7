/*!
 * Round-Robin Scheduler
 * Single FIFO ready queue with a fixed quantum
 */

use super::engine::Engine;
use super::traits::Scheduler;
use super::types::{Policy, TimeQuantum};
use crate::process::ProcId;
use std::collections::VecDeque;

/// Round-robin over one queue
///
/// A process that blocks on I/O pays the block inline and rejoins the tail,
/// the same position as one whose quantum expired.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> TimeQuantum {
        self.quantum
    }
}

impl Scheduler for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn schedule(&self, engine: &mut Engine<'_>) {
        let quantum = self.quantum.get();
        let mut ready: VecDeque<ProcId> = engine.process_ids().into();

        while let Some(id) = ready.pop_front() {
            let outcome = engine.dispatch(id, quantum, 0);
            if !outcome.done {
                ready.push_back(id);
            }
        }
    }
}
