//! CLI Argument Parsing
//!
//! A single command: positional target files plus flags. `--watch` may
//! appear anywhere on the line.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// concat-config - splice a shared base TOML fragment into config files
#[derive(Parser, Debug)]
#[command(name = "concat-config")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Without FILES, \"transient.toml\" and \"main.toml\" are used (or `targets` from .concat-config.toml)."
)]
pub struct Cli {
    /// Target files that receive the base block
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Merge once, then re-merge whenever the base file changes
    #[arg(short, long)]
    pub watch: bool,

    /// Base file spliced into every target
    #[arg(short, long, value_name = "PATH")]
    pub base: Option<PathBuf>,

    /// Show a diff of what would change without writing
    #[arg(long, conflicts_with = "watch")]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Debounce window for watch mode, in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}
