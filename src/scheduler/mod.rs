/*!
 * Scheduler Module
 * Scheduling policies and the deterministic run engine
 */

pub mod clock;
pub mod engine;
pub mod events;
pub mod fifo;
pub mod mlfq;
pub mod round_robin;
pub mod sjf;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export public API
pub use clock::VirtualClock;
pub use engine::{simulate, DispatchOutcome, Engine, RunOutcome};
pub use events::{EventLog, EventSink, NullSink, SchedEvent};
pub use fifo::Fifo;
pub use mlfq::Mlfq;
pub use round_robin::RoundRobin;
pub use sjf::ShortestJobFirst;
pub use stats::SchedulerStats;
pub use traits::Scheduler;
pub use types::{Policy, TimeQuantum};
