//! Caller-facing configuration.

use serde::{Deserialize, Serialize};
use sharpsim_eval::Limits;
use std::time::Duration;

/// Settings for one simulated run.
///
/// Deserializes from partial JSON; missing fields take their defaults:
///
/// ```json
/// { "latency_ms": 0, "limits": { "max_statements": 500 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorOptions {
    /// Simulated compile-and-run delay awaited by [`run_code`](crate::run_code).
    pub latency_ms: u64,
    pub limits: Limits,
}

impl SimulatorOptions {
    pub const DEFAULT_LATENCY_MS: u64 = 500;

    /// Default options with no simulated latency.
    pub fn immediate() -> Self {
        Self {
            latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            latency_ms: Self::DEFAULT_LATENCY_MS,
            limits: Limits::default(),
        }
    }
}
