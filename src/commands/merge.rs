use anyhow::Result;
use concat_config::application::{MergeOptions, MergeUseCase};
use concat_config::config::Config;

use super::local_fs;
use crate::ui::context::UiContext;
use crate::ui::views::merge::{render_dry_run, render_merge_result};

pub fn cmd_merge(config: &Config, dry_run: bool, verbose: u8, ui: &UiContext) -> Result<()> {
    let options = MergeOptions::from_config(config).with_dry_run(dry_run);
    let result = MergeUseCase::new(local_fs(config)).execute(&options)?;

    if ui.json {
        println!("{}", result.to_json());
    } else if dry_run {
        print!("{}", render_dry_run(&result, ui.color, ui.unicode));
    } else {
        print!("{}", render_merge_result(&result, verbose, ui.color, ui.unicode));
    }

    Ok(())
}
