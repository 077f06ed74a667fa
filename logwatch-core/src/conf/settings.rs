use crate::monitor::{DEFAULT_ALERT_RATE, DEFAULT_ALERT_WINDOW};
use crate::reorder::DEFAULT_REORDER_DEPTH;
use crate::source::DEFAULT_QUEUE_CAPACITY;
use crate::stats::{DEFAULT_STATS_INTERVAL, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything needed to replay one access log.
///
/// Every field has a default except `input`, which has to come from the config file or the
/// command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    #[serde(default)]
    pub stats: StatsConfig,

    #[serde(default)]
    pub alert: AlertConfig,

    #[serde(default)]
    pub reader: ReaderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    /// Seconds between top sections reports.
    pub interval_secs: u64,
    /// Sections listed per report (ties may add more).
    pub top_k: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_STATS_INTERVAL,
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    /// Length of the sliding alert window in seconds.
    pub window_secs: usize,
    /// Average hits per second over the window that raises an alert.
    pub rate: u64,
}

impl AlertConfig {
    pub fn threshold(&self) -> u64 {
        self.rate.saturating_mul(self.window_secs as u64)
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_ALERT_WINDOW,
            rate: DEFAULT_ALERT_RATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderConfig {
    /// Records held back to restore timestamp order; 0 disables reordering.
    pub reorder_depth: usize,
    /// Decoded records buffered between the reader thread and playback.
    pub queue_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            reorder_depth: DEFAULT_REORDER_DEPTH,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}
