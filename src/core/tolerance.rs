/*!
 * Floating Point Tolerance
 * Named comparisons for every boundary decision the engine makes
 */

/// Absolute tolerance for time and CPU comparisons
pub const EPSILON: f64 = 1e-9;

/// A process used its whole turn (not cut short by I/O or completion)
#[inline]
pub fn quantum_exhausted(taken: f64, quantum: f64) -> bool {
    taken >= quantum - EPSILON
}

/// Cumulative CPU has reached (or passed) an I/O threshold
#[inline]
pub fn io_threshold_reached(cpu_consumed: f64, when_cpu: f64) -> bool {
    cpu_consumed >= when_cpu - EPSILON
}

/// No CPU work is left
#[inline]
pub fn work_exhausted(remaining: f64) -> bool {
    remaining <= EPSILON
}

/// Two time values are indistinguishable
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}
