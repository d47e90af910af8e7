/*!
 * Virtual Clock
 * Simulated time, advanced only by CPU consumed and I/O blocks
 */

use crate::core::types::SimTime;

/// Monotonic scalar clock for one simulation run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VirtualClock {
    now: SimTime,
}

impl VirtualClock {
    pub const fn new() -> Self {
        Self { now: 0.0 }
    }

    #[inline(always)]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Move the clock forward and return the new time
    #[inline]
    pub fn advance(&mut self, dt: SimTime) -> SimTime {
        debug_assert!(dt.is_finite() && dt >= 0.0, "clock cannot move by {dt}");
        self.now += dt;
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = VirtualClock::new();
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.advance(0.5), 0.5);
        assert_eq!(clock.advance(0.0), 0.5);
        assert_eq!(clock.advance(1.5), 2.0);
    }
}
