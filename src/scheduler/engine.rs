/*!
 * Scheduling Engine
 * Shared run loop state: process table, virtual clock, stats, and events
 *
 * Policies only decide *which* process runs next and with what budget;
 * every clock, metric, and event update goes through `Engine::dispatch`.
 */

use super::clock::VirtualClock;
use super::events::{EventSink, SchedEvent};
use super::stats::SchedulerStats;
use super::traits::Scheduler;
use crate::core::tolerance::quantum_exhausted;
use crate::core::types::{CpuTime, Level, SimTime};
use crate::metrics::MetricsRecord;
use crate::process::{ProcId, ProcessDefinition, ProcessTable, Slice};
use serde::Serialize;
use tracing::{debug, trace};

/// Result of one dispatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchOutcome {
    pub slice: Slice,
    /// The process finished during this dispatch
    pub done: bool,
}

/// Everything a completed run produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    /// One record per process, in completion order
    pub records: Vec<MetricsRecord>,
    pub stats: SchedulerStats,
    /// Clock value when the last process finished
    pub makespan: SimTime,
}

/// Per-run simulation state driven by a `Scheduler`
pub struct Engine<'a> {
    table: ProcessTable<'a>,
    clock: VirtualClock,
    stats: SchedulerStats,
    sink: &'a mut dyn EventSink,
    records: Vec<MetricsRecord>,
    last_dispatched: Option<ProcId>,
}

impl<'a> Engine<'a> {
    /// Fresh engine at time zero with one runtime state per definition
    pub fn new(defs: &'a [ProcessDefinition], sink: &'a mut dyn EventSink) -> Self {
        Self {
            table: ProcessTable::instantiate(defs),
            clock: VirtualClock::new(),
            stats: SchedulerStats::new(),
            sink,
            records: Vec::with_capacity(defs.len()),
            last_dispatched: None,
        }
    }

    /// Process handles in definition order
    pub fn process_ids(&self) -> Vec<ProcId> {
        self.table.ids().collect()
    }

    pub fn table(&self) -> &ProcessTable<'a> {
        &self.table
    }

    pub fn definition(&self, id: ProcId) -> &'a ProcessDefinition {
        self.table[id].definition()
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    #[inline]
    pub fn is_done(&self, id: ProcId) -> bool {
        self.table[id].is_done()
    }

    pub fn stats(&self) -> &SchedulerStats {
        &self.stats
    }

    /// Give `id` the CPU for at most `budget` units
    ///
    /// Stamps first run, runs the consumption step, advances the clock by the
    /// CPU taken and then by any I/O block, and on completion stamps the
    /// finish time and emits the metrics record.
    pub fn dispatch(&mut self, id: ProcId, budget: CpuTime, level: Level) -> DispatchOutcome {
        let now = self.clock.now();

        self.stats.dispatches += 1;
        if self.last_dispatched != Some(id) {
            self.stats.context_switches += 1;
        }
        self.last_dispatched = Some(id);

        let proc = &mut self.table[id];
        debug_assert!(!proc.is_done(), "dispatch of finished process {}", proc.name());
        proc.mark_first_run(now);

        trace!(proc = %proc.name(), at = now, budget, level, "dispatch");
        emit(&mut *self.sink, || SchedEvent::Dispatched {
            proc: proc.name().clone(),
            at: now,
            budget,
            level,
        });

        let slice = proc.consume(budget);
        let after_run = self.clock.advance(slice.taken);
        self.stats.total_cpu += slice.taken;
        emit(&mut *self.sink, || SchedEvent::Ran {
            proc: proc.name().clone(),
            taken: slice.taken,
            at: after_run,
        });

        if let Some(duration) = slice.io_block {
            let after_block = self.clock.advance(duration);
            self.stats.io_blocks += 1;
            self.stats.total_blocked += duration;
            emit(&mut *self.sink, || SchedEvent::Blocked {
                proc: proc.name().clone(),
                duration,
                at: after_block,
            });
        }

        let done = proc.is_done();
        if done {
            let at = self.clock.now();
            proc.mark_finished(at);
            self.records.push(proc.record());
            self.stats.completed += 1;
            debug!(proc = %proc.name(), at, blocked = proc.blocked_time(), "process finished");
            emit(&mut *self.sink, || SchedEvent::Finished {
                proc: proc.name().clone(),
                at,
            });
        } else if quantum_exhausted(slice.taken, budget) {
            self.stats.quantum_expiries += 1;
        }

        DispatchOutcome { slice, done }
    }

    /// Dispatch `id` with its whole remaining demand until it finishes
    ///
    /// I/O blocks along the way are absorbed; nothing else runs meanwhile.
    pub fn run_to_completion(&mut self, id: ProcId) {
        while !self.is_done(id) {
            let budget = self.table[id].remaining();
            self.dispatch(id, budget, 0);
        }
    }

    /// Record a queue level change decided by the policy
    pub fn record_demotion(&mut self, id: ProcId, from: Level, to: Level) {
        debug_assert!(to > from, "levels never move up: {from} -> {to}");
        self.stats.demotions += 1;
        let name = self.table[id].name();
        debug!(proc = %name, from, to, "demoted");
        emit(&mut *self.sink, || SchedEvent::Demoted {
            proc: name.clone(),
            from,
            to,
        });
    }

    /// Close the run and hand back the records in completion order
    pub fn finish(self) -> RunOutcome {
        debug_assert!(self.table.all_done(), "run finished with active processes");
        RunOutcome {
            makespan: self.clock.now(),
            records: self.records,
            stats: self.stats,
        }
    }
}

#[inline]
fn emit(sink: &mut dyn EventSink, event: impl FnOnce() -> SchedEvent) {
    if sink.enabled() {
        sink.emit(event());
    }
}

/// Run one complete simulation of `defs` under `scheduler`
pub fn simulate(
    scheduler: &dyn Scheduler,
    defs: &[ProcessDefinition],
    sink: &mut dyn EventSink,
) -> RunOutcome {
    let mut engine = Engine::new(defs, sink);
    scheduler.schedule(&mut engine);
    engine.finish()
}
