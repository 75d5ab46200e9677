use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use concat_config::application::{
    MergeOptions, MergeUseCase, WatchEvent, WatchOptions, WatchUseCase,
};
use concat_config::config::Config;

use super::local_fs;
use crate::ui::context::UiContext;
use crate::ui::views::merge::render_merge_result;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(config: &Config, verbose: u8, ui: &UiContext) -> Result<()> {
    // Initial merge, same as a plain run
    let result = MergeUseCase::new(local_fs(config)).execute(&MergeOptions::from_config(config))?;
    if ui.json {
        println!("{}", result.to_json());
    } else {
        print!("{}", render_merge_result(&result, verbose, ui.color, ui.unicode));
        print!("{}", render_watch_header(&config.base.display().to_string()));
    }

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    let json = ui.json;
    let (color, unicode) = (ui.color, ui.unicode);

    WatchUseCase::new(WatchOptions::from_config(config), local_fs(config)).start(
        running,
        |event| {
            if json {
                println!("{}", event.to_json());
                return;
            }
            // The header already names the watched file
            if matches!(event, WatchEvent::WatchStarted { .. }) && verbose == 0 {
                return;
            }

            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            let rendered = render_watch_event(&timestamp, &event, color, unicode);

            match event {
                WatchEvent::Error { .. } => eprint!("{rendered}"),
                _ => print!("{rendered}"),
            }
        },
    )?;

    Ok(())
}
