//! SinkOptions - sink context tuning knobs

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Options for a sink context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkOptions {
    /// External-change debounce window in milliseconds.
    ///
    /// Signals arriving inside the window are dropped, trading a bounded
    /// staleness window for protection against event storms from the hosting
    /// environment. `0` disables debouncing; correctness never depends on it.
    pub debounce_ms: u64,

    /// Prometheus exporter port (`None` = disabled)
    pub metrics_port: Option<u16>,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            metrics_port: None,
        }
    }
}

impl SinkOptions {
    /// Debounce window as a [`Duration`]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
