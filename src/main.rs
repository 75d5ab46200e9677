//! concat-config CLI - splice a shared base TOML fragment into config files
//!
//! Usage: concat-config [OPTIONS] [FILES]...
//!
//!   concat-config                  merge base.toml into transient.toml and main.toml
//!   concat-config a.toml b.toml    merge base.toml into a.toml and b.toml
//!   concat-config -w               merge, then re-merge on every change to base.toml

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::{warn, Level};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir()?;
    let loaded = concat_config::config::discover(&cwd)?;
    for warning in &loaded.warnings {
        warn!("{warning}");
    }

    let config = commands::resolve_config(&cli, loaded.config)?;
    let ui = ui::context::UiContext::new(cli.json, cli.color, &config);

    if cli.watch {
        commands::watch::cmd_watch(&config, cli.verbose, &ui)
    } else {
        commands::merge::cmd_merge(&config, cli.dry_run, cli.verbose, &ui)
    }
}

fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
