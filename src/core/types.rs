/*!
 * Core Types
 * Common type definitions used across the simulator
 */

/// A point on the virtual clock, in simulated time units
pub type SimTime = f64;

/// An amount of CPU work, in the same units as `SimTime`
pub type CpuTime = f64;

/// MLFQ queue level (0 = highest priority)
pub type Level = usize;
