/*!
 * Simulation Limits and Constants
 *
 * Defaults for every tunable of a simulation run, grouped by the component
 * that consumes them.
 */

// =============================================================================
// SCHEDULING
// =============================================================================

/// Time budget granted per turn by Round-Robin and MLFQ
pub const DEFAULT_QUANTUM: f64 = 0.5;

/// Number of MLFQ priority levels; level 0 is the highest
pub const DEFAULT_MLFQ_LEVELS: usize = 3;

// =============================================================================
// HARNESS
// =============================================================================

/// Runs per (policy, scenario) pair when the caller does not say otherwise
pub const DEFAULT_REPEAT: usize = 3;

/// Lower bound applied to any requested repeat count
pub const MIN_REPEAT: usize = 1;

// =============================================================================
// REPORTING
// =============================================================================

/// Fixed-point digits used for every time value in tabular output
pub const REPORT_PRECISION: usize = 3;
