use concat_config::application::{MergeResult, TargetOutcome};
use concat_config::domain::SpliceAction;

use crate::ui::components::diff::render_unified_diff_with_line_numbers;
use crate::ui::primitives::icon::Icon;

/// One line per target, then the summary line.
pub fn render_merge_result(
    result: &MergeResult,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if verbose > 0 {
        for target in &result.targets {
            out.push_str(&render_target_line(target, supports_color, supports_unicode));
        }
    }

    out.push_str(&result.summary_line());
    out.push('\n');
    out
}

fn render_target_line(
    target: &TargetOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, verb) = match (target.changed, target.action) {
        (false, _) => (Icon::Pending, "unchanged"),
        (true, SpliceAction::Replaced) => (Icon::Success, "replaced block in"),
        (true, SpliceAction::Appended) => (Icon::Success, "appended block to"),
    };
    format!(
        "  {} {} {}\n",
        icon.colored(supports_color, supports_unicode),
        verb,
        target.path.display()
    )
}

/// Unified diff for every target that would change
pub fn render_dry_run(
    result: &MergeResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} Dry run: {} of {} file(s) would change\n",
        Icon::Diff.colored(supports_color, supports_unicode),
        result.changed_count(),
        result.targets.len()
    );

    for target in result.targets.iter().filter(|t| t.changed) {
        out.push('\n');
        out.push_str(&render_unified_diff_with_line_numbers(
            &target.path.display().to_string(),
            &String::from_utf8_lossy(&target.previous),
            &String::from_utf8_lossy(&target.merged),
            supports_color,
        ));
    }

    out
}
