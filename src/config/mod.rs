//! Configuration module for concat-config
//!
//! Resolution order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Project config (`./.concat-config.toml`)
//! 3. User config (`<config dir>/concat-config/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    discover, discover_in, load_with_warnings, user_config_path, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{
    ColorMode, Config, OutputConfig, WatchConfig, WriteConfig, DEFAULT_BASE_FILE,
    DEFAULT_DEBOUNCE_MS, DEFAULT_TARGETS,
};
