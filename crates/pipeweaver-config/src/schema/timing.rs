//! Timer cadences for the shell's cooperative tasks.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// All values are milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Quiet period before a bounds change is reported to the host.
    pub debounce_ms: u64,
    /// How often pending host commands are checked.
    pub poll_interval_ms: u64,
    /// How often the content runtime is asked to collect garbage.
    pub maintenance_interval_ms: u64,
    /// Delay before the second collection request of a maintenance pass.
    pub maintenance_followup_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 250,
            poll_interval_ms: 20,
            maintenance_interval_ms: 10_000,
            maintenance_followup_ms: 50,
        }
    }
}

impl TimingConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn maintenance_interval(&self) -> Duration {
        Duration::from_millis(self.maintenance_interval_ms)
    }

    pub fn maintenance_followup(&self) -> Duration {
        Duration::from_millis(self.maintenance_followup_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults_as_durations() {
        let timing = TimingConfig::default();
        assert_eq!(timing.debounce(), Duration::from_millis(250));
        assert_eq!(timing.poll_interval(), Duration::from_millis(20));
        assert_eq!(timing.maintenance_interval(), Duration::from_secs(10));
        assert_eq!(timing.maintenance_followup(), Duration::from_millis(50));
    }
}
