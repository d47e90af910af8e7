/*!
 * Run Configuration
 * Simulation parameters and their builder
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{DEFAULT_MLFQ_LEVELS, DEFAULT_REPEAT, MIN_REPEAT};
use crate::core::types::CpuTime;
use crate::scheduler::TimeQuantum;
use serde::{Deserialize, Serialize};

/// Parameters shared by every run of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimConfig {
    /// Budget per turn for RR and MLFQ
    pub quantum: TimeQuantum,
    /// Number of MLFQ levels, at least one
    pub mlfq_levels: usize,
    /// Runs averaged per (policy, workload), at least one
    pub repeat: usize,
}

impl SimConfig {
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::new()
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: TimeQuantum::default(),
            mlfq_levels: DEFAULT_MLFQ_LEVELS,
            repeat: DEFAULT_REPEAT,
        }
    }
}

/// Builder for SimConfig
#[derive(Debug, Clone, Default)]
pub struct SimConfigBuilder {
    quantum: Option<CpuTime>,
    mlfq_levels: Option<usize>,
    repeat: Option<i64>,
}

impl SimConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RR/MLFQ quantum
    pub fn with_quantum(mut self, quantum: CpuTime) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Set the number of MLFQ levels
    pub fn with_mlfq_levels(mut self, levels: usize) -> Self {
        self.mlfq_levels = Some(levels);
        self
    }

    /// Set the repeat count; values below one are raised to one
    pub fn with_repeat(mut self, repeat: i64) -> Self {
        self.repeat = Some(repeat);
        self
    }

    /// Validate and build the SimConfig
    pub fn build(self) -> Result<SimConfig, ConfigError> {
        let quantum = match self.quantum {
            Some(q) => TimeQuantum::new(q)?,
            None => TimeQuantum::default(),
        };

        let mlfq_levels = self.mlfq_levels.unwrap_or(DEFAULT_MLFQ_LEVELS);
        if mlfq_levels == 0 {
            return Err(ConfigError::InvalidLevels(mlfq_levels));
        }

        let repeat = match self.repeat {
            Some(n) => usize::try_from(n).unwrap_or(MIN_REPEAT).max(MIN_REPEAT),
            None => DEFAULT_REPEAT,
        };

        Ok(SimConfig {
            quantum,
            mlfq_levels,
            repeat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::builder().build().unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.quantum.get(), 0.5);
        assert_eq!(config.mlfq_levels, 3);
        assert_eq!(config.repeat, 3);
    }

    #[test]
    fn test_repeat_is_clamped() {
        for (given, expected) in [(-5, 1), (0, 1), (1, 1), (7, 7)] {
            let config = SimConfig::builder().with_repeat(given).build().unwrap();
            assert_eq!(config.repeat, expected, "repeat {given}");
        }
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            SimConfig::builder().with_quantum(0.0).build(),
            Err(ConfigError::InvalidQuantum(0.0))
        );
        assert_eq!(
            SimConfig::builder().with_mlfq_levels(0).build(),
            Err(ConfigError::InvalidLevels(0))
        );
    }
}
