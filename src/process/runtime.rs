/*!
 * Process Runtime State
 * Per-run mutable state and the CPU/IO consumption step
 */

use super::definition::{IoEvent, ProcessDefinition};
use crate::core::name::ProcName;
use crate::core::tolerance::{io_threshold_reached, work_exhausted};
use crate::core::types::{CpuTime, SimTime};
use crate::metrics::MetricsRecord;

/// Result of letting a process run for up to one budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    /// CPU actually consumed, `0 <= taken <= budget`
    pub taken: CpuTime,
    /// Blocking duration if an I/O event fired during this slice
    pub io_block: Option<SimTime>,
}

/// Mutable simulation state for one process in one run
///
/// Borrows its definition; the I/O schedule is read through `next_io` and
/// never copied or modified.
#[derive(Debug, Clone)]
pub struct ProcessRuntime<'d> {
    def: &'d ProcessDefinition,
    remaining: CpuTime,
    cpu_consumed: CpuTime,
    blocked_time: SimTime,
    next_io: usize,
    first_run: Option<SimTime>,
    finish: Option<SimTime>,
}

impl<'d> ProcessRuntime<'d> {
    /// Fresh runtime state at simulated time zero
    pub fn instantiate(def: &'d ProcessDefinition) -> Self {
        Self {
            def,
            remaining: def.total_cpu(),
            cpu_consumed: 0.0,
            blocked_time: 0.0,
            next_io: 0,
            first_run: None,
            finish: None,
        }
    }

    /// Run for at most `budget` CPU units, stopping at the next I/O boundary
    ///
    /// If the pending I/O threshold has already been reached the event fires
    /// with zero CPU consumed. If the slice lands on the threshold, the process
    /// both consumes CPU and blocks in the same step.
    pub fn consume(&mut self, budget: CpuTime) -> Slice {
        debug_assert!(budget > 0.0, "consume() needs a positive budget");
        debug_assert!(!self.is_done(), "consume() on finished process");

        let Some(event) = self.pending_io() else {
            let taken = budget.min(self.remaining);
            self.apply(taken);
            return Slice {
                taken,
                io_block: None,
            };
        };

        if io_threshold_reached(self.cpu_consumed, event.when_cpu) {
            return Slice {
                taken: 0.0,
                io_block: Some(self.trigger_io(event)),
            };
        }

        let until_io = event.when_cpu - self.cpu_consumed;
        let taken = budget.min(until_io).min(self.remaining);
        self.apply(taken);

        let io_block = io_threshold_reached(self.cpu_consumed, event.when_cpu)
            .then(|| self.trigger_io(event));

        Slice { taken, io_block }
    }

    fn apply(&mut self, taken: CpuTime) {
        self.cpu_consumed += taken;
        self.remaining -= taken;
    }

    fn trigger_io(&mut self, event: IoEvent) -> SimTime {
        self.next_io += 1;
        self.blocked_time += event.duration;
        event.duration
    }

    /// Next I/O event not yet triggered
    #[inline]
    pub fn pending_io(&self) -> Option<IoEvent> {
        self.def.io_events().get(self.next_io).copied()
    }

    /// Stamp the first time this process was given the CPU (idempotent)
    pub fn mark_first_run(&mut self, now: SimTime) -> bool {
        if self.first_run.is_some() {
            return false;
        }
        self.first_run = Some(now);
        true
    }

    /// Stamp completion time; only valid once the work is exhausted
    pub fn mark_finished(&mut self, now: SimTime) {
        debug_assert!(self.is_done(), "finish stamped on unfinished process");
        debug_assert!(self.finish.is_none(), "finish stamped twice");
        self.finish = Some(now);
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        work_exhausted(self.remaining)
    }

    #[inline]
    pub fn definition(&self) -> &'d ProcessDefinition {
        self.def
    }

    #[inline]
    pub fn name(&self) -> &ProcName {
        self.def.name()
    }

    #[inline]
    pub fn remaining(&self) -> CpuTime {
        self.remaining
    }

    #[inline]
    pub fn cpu_consumed(&self) -> CpuTime {
        self.cpu_consumed
    }

    #[inline]
    pub fn blocked_time(&self) -> SimTime {
        self.blocked_time
    }

    #[inline]
    pub fn next_io_index(&self) -> usize {
        self.next_io
    }

    #[inline]
    pub fn first_run(&self) -> Option<SimTime> {
        self.first_run
    }

    #[inline]
    pub fn finish_time(&self) -> Option<SimTime> {
        self.finish
    }

    /// Snapshot the lifetime metrics; unset times report as zero
    pub fn record(&self) -> MetricsRecord {
        MetricsRecord {
            name: self.name().clone(),
            elapsed: self.finish.unwrap_or(0.0),
            cpu: self.cpu_consumed,
            blocked: self.blocked_time,
            first_run: self.first_run.unwrap_or(0.0),
        }
    }
}
