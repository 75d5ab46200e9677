use concat_config::application::WatchEvent;

use crate::ui::primitives::icon::Icon;

/// The line printed once the initial merge is done
pub fn render_watch_header(base: &str) -> String {
    format!("Watching \"{base}\"...\n")
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { targets, .. } => format!(
            "{} {} Targets: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            targets.join(", ")
        ),
        WatchEvent::BaseChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::MergeComplete { targets, changed } => format!(
            "{} {} Merged: {} file(s), {} changed\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            targets,
            changed
        ),
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
