/*!
 * Scheduler Types
 * Policy selector and time quantum
 */

use crate::core::errors::ConfigError;
use crate::core::limits::DEFAULT_QUANTUM;
use crate::core::types::CpuTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First in, first out; runs each process to completion
    Fifo,
    /// Non-preemptive shortest job first, ordered by initial demand
    Sjf,
    /// Round-robin over a single queue
    RoundRobin,
    /// Multi-level feedback queue without promotion
    Mlfq,
}

impl Policy {
    /// Every policy, in presentation order
    pub const ALL: [Policy; 4] = [Self::Fifo, Self::Sjf, Self::RoundRobin, Self::Mlfq];

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Sjf => "sjf",
            Self::RoundRobin => "rr",
            Self::Mlfq => "mlfq",
        }
    }
}

impl FromStr for Policy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" | "fcfs" => Ok(Self::Fifo),
            "sjf" => Ok(Self::Sjf),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            "mlfq" => Ok(Self::Mlfq),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// CPU budget granted per turn by the preemptive policies
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(CpuTime);

impl TimeQuantum {
    /// Create new time quantum; must be finite and positive
    pub fn new(units: CpuTime) -> Result<Self, ConfigError> {
        if !units.is_finite() || units <= 0.0 {
            return Err(ConfigError::InvalidQuantum(units));
        }
        Ok(Self(units))
    }

    #[inline(always)]
    pub const fn get(&self) -> CpuTime {
        self.0
    }
}

impl Default for TimeQuantum {
    fn default() -> Self {
        Self(DEFAULT_QUANTUM)
    }
}

impl fmt::Display for TimeQuantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let units = CpuTime::deserialize(deserializer)?;
        Self::new(units).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("fifo".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("SJF".parse::<Policy>().unwrap(), Policy::Sjf);
        assert_eq!("rr".parse::<Policy>().unwrap(), Policy::RoundRobin);
        assert_eq!("mlfq".parse::<Policy>().unwrap(), Policy::Mlfq);
        assert_eq!(
            "lottery".parse::<Policy>(),
            Err(ConfigError::UnknownPolicy("lottery".into()))
        );
    }

    #[test]
    fn test_policy_round_trips_through_name() {
        for policy in Policy::ALL {
            assert_eq!(policy.as_str().parse::<Policy>().unwrap(), policy);
        }
        assert_eq!(serde_json::to_string(&Policy::RoundRobin).unwrap(), r#""rr""#);
    }

    #[test]
    fn test_quantum_validation() {
        assert_eq!(TimeQuantum::default().get(), 0.5);
        assert!(TimeQuantum::new(0.25).is_ok());
        assert_eq!(TimeQuantum::new(0.0), Err(ConfigError::InvalidQuantum(0.0)));
        assert!(TimeQuantum::new(-1.0).is_err());
        assert!(TimeQuantum::new(f64::INFINITY).is_err());
        assert!(serde_json::from_str::<TimeQuantum>("-0.5").is_err());
    }
}
