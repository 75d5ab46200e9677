//! Merge Options

use std::path::PathBuf;

use crate::config::Config;

/// Options for the merge use case
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Base fragment to splice in
    pub base: PathBuf,
    /// Files receiving the marker block, processed in order
    pub targets: Vec<PathBuf>,
    /// Dry run (compute, but don't write files)
    pub dry_run: bool,
}

impl MergeOptions {
    pub fn new(base: impl Into<PathBuf>, targets: Vec<PathBuf>) -> Self {
        Self {
            base: base.into(),
            targets,
            dry_run: false,
        }
    }

    /// Base and targets taken from a resolved config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base.clone(), config.targets.clone())
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
