//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConcatResult;
use crate::infrastructure::DEFAULT_FILE_MODE;

use super::loader::{self, ConfigWarning};

/// Base fragment spliced into targets when nothing else is configured
pub const DEFAULT_BASE_FILE: &str = "base.toml";

/// Targets merged when none are given on the command line or in config
pub const DEFAULT_TARGETS: &[&str] = &["transient.toml", "main.toml"];

/// Quiet period of the leading-edge debounce
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Watch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl WatchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// How target files are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteConfig {
    /// Permission bits for files that do not exist yet, e.g. `0o644`
    #[serde(default = "default_mode")]
    pub mode: u32,

    /// Write through a temp file and rename it over the target
    #[serde(default = "default_true")]
    pub atomic: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            atomic: true,
        }
    }
}

fn default_mode() -> u32 {
    DEFAULT_FILE_MODE
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Full configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base")]
    pub base: PathBuf,

    #[serde(default = "default_targets")]
    pub targets: Vec<PathBuf>,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub write: WriteConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: default_base(),
            targets: default_targets(),
            watch: WatchConfig::default(),
            write: WriteConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_base() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_FILE)
}

fn default_targets() -> Vec<PathBuf> {
    DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConcatResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ConcatResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }
}
