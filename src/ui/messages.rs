use crate::models::notification::{Notification, Severity};
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Print a controller notification with severity styling. Severity affects
/// presentation only.
pub fn notify(n: &Notification) {
    match n.severity {
        Severity::Info => info(&n.message),
        Severity::Success => success(&n.message),
        Severity::Warning => warning(&n.message),
        Severity::Danger => error(&n.message),
    }
}

/// Render a notification into a string (used by the interactive session,
/// which repaints instead of appending lines).
pub fn render(n: &Notification) -> String {
    let (color, icon) = match n.severity {
        Severity::Info => (FG_BLUE, ICON_INFO),
        Severity::Success => (FG_GREEN, ICON_OK),
        Severity::Warning => (FG_YELLOW, ICON_WARN),
        Severity::Danger => (FG_RED, ICON_ERR),
    };
    format!("{}{}{} {}{}", color, BOLD, icon, RESET, n.message)
}
