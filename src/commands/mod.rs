//! Command implementations for the binary

pub mod merge;
pub mod watch;

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};
use concat_config::config::Config;
use concat_config::LocalFs;

use crate::cli::Cli;

/// Layer command-line flags over the loaded config.
///
/// Positional files replace the configured targets; they are not appended.
pub fn resolve_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(base) = &cli.base {
        config.base = base.clone();
    }
    if !cli.files.is_empty() {
        config.targets = cli.files.clone();
    }
    if let Some(ms) = cli.debounce_ms {
        config.watch.debounce_ms = ms;
    }

    if config.targets.is_empty() {
        bail!("no target files given");
    }
    if let Some(target) = config
        .targets
        .iter()
        .find(|t| same_file(t, &config.base))
    {
        bail!("base file {} is also listed as a target", target.display());
    }

    Ok(config)
}

/// The file system adapter configured by `[write]`
pub fn local_fs(config: &Config) -> LocalFs {
    LocalFs::new()
        .with_mode(config.write.mode)
        .with_atomic(config.write.atomic)
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
