use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upper bound for the simulated data-source latency.
pub const MAX_SIMULATED_LATENCY_MS: u64 = 10_000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
}

/// Where flights come from and how the mock source behaves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Delay added to every data access call, in milliseconds (default: 0).
    #[serde(default)]
    pub simulated_latency_ms: u64,
    /// JSON file with an array of flights. Built-in data when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl DataConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}
