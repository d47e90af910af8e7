/*!
 * Process Module
 * Process definitions, runtime state, and the per-run process table
 */

pub mod definition;
pub mod runtime;
pub mod table;

// Re-export for convenience
pub use definition::{IoEvent, ProcessDefinition};
pub use runtime::{ProcessRuntime, Slice};
pub use table::{ProcId, ProcessTable};
