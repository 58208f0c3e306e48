/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

use crate::models::notification::Severity;

pub fn color_for_severity(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => BLUE,
        Severity::Success => GREEN,
        Severity::Warning => YELLOW,
        Severity::Danger => RED,
    }
}

/// Returns GREY for empty form values so blank cells fade out of the grid.
pub fn color_for_value(value: &str) -> &'static str {
    if value.trim().is_empty() || value.trim() == "--:--" {
        GREY
    } else {
        RESET
    }
}

/// Invalid fields are painted red, the terminal stand-in for the page's
/// `is-invalid` class.
pub fn color_for_validity(invalid: bool) -> &'static str {
    if invalid { RED } else { RESET }
}
