//! Runtime configuration for a [`City`](crate::city::City).
//!
//! Capacities and thresholds are constants (see [`crate::constants`]);
//! the only per-run setting is where the log is saved to and loaded from.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::LOG_FILE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityConfig {
    /// File used by save and load. Showing the log always reads
    /// [`LOG_FILE`] regardless.
    pub log_path: PathBuf,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(LOG_FILE),
        }
    }
}

impl CityConfig {
    pub fn with_log_path(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }
}
