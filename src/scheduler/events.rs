/*!
 * Scheduling Events
 * Strongly-typed record of every decision the engine makes
 */

use crate::core::name::ProcName;
use crate::core::types::{CpuTime, Level, SimTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scheduling step, stamped with the virtual clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SchedEvent {
    /// Process selected with a CPU budget
    Dispatched {
        proc: ProcName,
        at: SimTime,
        budget: CpuTime,
        level: Level,
    },
    /// CPU consumed; `at` is the clock after the run
    Ran {
        proc: ProcName,
        taken: CpuTime,
        at: SimTime,
    },
    /// I/O block paid; `at` is the clock after the block
    Blocked {
        proc: ProcName,
        duration: SimTime,
        at: SimTime,
    },
    /// MLFQ level change
    Demoted {
        proc: ProcName,
        from: Level,
        to: Level,
    },
    Finished {
        proc: ProcName,
        at: SimTime,
    },
}

impl SchedEvent {
    pub fn proc(&self) -> &ProcName {
        match self {
            Self::Dispatched { proc, .. }
            | Self::Ran { proc, .. }
            | Self::Blocked { proc, .. }
            | Self::Demoted { proc, .. }
            | Self::Finished { proc, .. } => proc,
        }
    }

    /// Clock value carried by the event, if any
    pub fn at(&self) -> Option<SimTime> {
        match self {
            Self::Dispatched { at, .. }
            | Self::Ran { at, .. }
            | Self::Blocked { at, .. }
            | Self::Finished { at, .. } => Some(*at),
            Self::Demoted { .. } => None,
        }
    }
}

impl fmt::Display for SchedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispatched {
                proc,
                at,
                budget,
                level,
            } => write!(f, "[{at:>9.3}] dispatch {proc} budget={budget:.3} level={level}"),
            Self::Ran { proc, taken, at } => write!(f, "[{at:>9.3}] ran      {proc} taken={taken:.3}"),
            Self::Blocked { proc, duration, at } => {
                write!(f, "[{at:>9.3}] blocked  {proc} io={duration:.3}")
            }
            Self::Demoted { proc, from, to } => write!(f, "[{:>9}] demote   {proc} {from} -> {to}", ""),
            Self::Finished { proc, at } => write!(f, "[{at:>9.3}] finish   {proc}"),
        }
    }
}

/// Receiver for scheduling events
pub trait EventSink {
    fn emit(&mut self, event: SchedEvent);

    /// Whether events are kept; lets the engine skip building them
    fn enabled(&self) -> bool {
        true
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    #[inline(always)]
    fn emit(&mut self, _event: SchedEvent) {}

    #[inline(always)]
    fn enabled(&self) -> bool {
        false
    }
}

/// Records events in emission order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<SchedEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SchedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchedEvent> {
        self.events.iter()
    }

    /// All events concerning one process
    pub fn for_proc<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SchedEvent> + 'a {
        self.events.iter().filter(move |e| e.proc() == name)
    }

    /// Clock values at which `name` was dispatched
    pub fn dispatch_times(&self, name: &str) -> Vec<SimTime> {
        self.for_proc(name)
            .filter_map(|e| match e {
                SchedEvent::Dispatched { at, .. } => Some(*at),
                _ => None,
            })
            .collect()
    }

    /// Queue level at every dispatch of `name`
    pub fn dispatch_levels(&self, name: &str) -> Vec<Level> {
        self.for_proc(name)
            .filter_map(|e| match e {
                SchedEvent::Dispatched { level, .. } => Some(*level),
                _ => None,
            })
            .collect()
    }

    /// Process names in completion order
    pub fn completion_order(&self) -> Vec<&ProcName> {
        self.events
            .iter()
            .filter(|e| matches!(e, SchedEvent::Finished { .. }))
            .map(SchedEvent::proc)
            .collect()
    }

    /// Every clock stamp in emission order
    pub fn timeline(&self) -> Vec<SimTime> {
        self.events.iter().filter_map(SchedEvent::at).collect()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: SchedEvent) {
        self.events.push(event);
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a SchedEvent;
    type IntoIter = std::slice::Iter<'a, SchedEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(name: &str, at: SimTime) -> SchedEvent {
        SchedEvent::Finished {
            proc: name.into(),
            at,
        }
    }

    #[test]
    fn test_null_sink_is_disabled() {
        let mut sink = NullSink;
        assert!(!sink.enabled());
        sink.emit(finished("A", 1.0));
    }

    #[test]
    fn test_event_log_queries() {
        let mut log = EventLog::new();
        log.emit(SchedEvent::Dispatched {
            proc: "A".into(),
            at: 0.0,
            budget: 0.5,
            level: 0,
        });
        log.emit(SchedEvent::Demoted {
            proc: "A".into(),
            from: 0,
            to: 1,
        });
        log.emit(finished("B", 2.0));
        log.emit(finished("A", 3.0));

        assert_eq!(log.len(), 4);
        assert_eq!(log.dispatch_times("A"), vec![0.0]);
        assert_eq!(log.dispatch_levels("A"), vec![0]);
        assert_eq!(log.completion_order(), vec!["B", "A"]);
        assert_eq!(log.timeline(), vec![0.0, 2.0, 3.0]);
    }

    #[test]
    fn test_event_serializes_tagged() {
        let json = serde_json::to_string(&finished("C", 1.5)).unwrap();
        assert_eq!(json, r#"{"event":"finished","proc":"C","at":1.5}"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(finished("A", 10.0).to_string(), "[   10.000] finish   A");
    }
}
