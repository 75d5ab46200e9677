//! Watch event types and options

use std::path::Path;
use std::time::Duration;

use crate::application::merge::MergeOptions;
use crate::config::{Config, DEFAULT_DEBOUNCE_MS};

/// How often the loop wakes up to check the cancellation flag
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// What to merge on every qualifying change; `merge.base` is the watched file
    pub merge: MergeOptions,
    /// Leading-edge debounce window
    pub debounce: Duration,
    /// Upper bound on how long shutdown takes to be noticed
    pub poll_interval: Duration,
}

impl WatchOptions {
    /// Create new watch options with default timings
    pub fn new(merge: MergeOptions) -> Self {
        Self {
            merge,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
        }
    }

    /// Base, targets and debounce window taken from a resolved config
    pub fn from_config(config: &Config) -> Self {
        Self::new(MergeOptions::from_config(config)).with_debounce(config.watch.debounce())
    }

    /// Set the debounce window
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the cancellation poll interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// The watched file
    pub fn base(&self) -> &Path {
        &self.merge.base
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watcher subscribed to the base file
    WatchStarted { base: String, targets: Vec<String> },
    /// A write to the base file passed the debounce gate
    BaseChanged { path: String },
    /// Merge triggered by a change finished
    MergeComplete { targets: usize, changed: usize },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
