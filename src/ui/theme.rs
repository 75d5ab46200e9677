use crossterm::style::Color;

/// Design tokens for concat-config output.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";
    pub const WATCH: &str = "⟳";
    pub const DIFF: &str = "Δ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";
    pub const WATCH: &str = "[~]";
    pub const DIFF: &str = "[DIFF]";
}
