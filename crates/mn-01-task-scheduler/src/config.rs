//! Configuration types for scheduled units

use serde::Deserialize;
use std::time::Duration;

/// Runtime configuration for a periodic unit
#[derive(Clone, Debug, Deserialize)]
pub struct PeriodicConfig {
    /// Unit name used in log lines
    pub name: String,

    /// Tick interval in milliseconds
    pub interval_ms: u64,
}

impl Default for PeriodicConfig {
    fn default() -> Self {
        Self {
            name: "periodic".to_string(),
            interval_ms: 1_000,
        }
    }
}

impl PeriodicConfig {
    /// Tick interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
