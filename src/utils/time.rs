//! Time utilities: parsing HH:MM, duration computations, formatting, etc.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Minutes from `start` to `end`, treating an `end` earlier than `start`
/// as crossing midnight (the shift spans into the next day).
pub fn minutes_between_wrapping(start: NaiveTime, end: NaiveTime) -> i64 {
    let diff = (end - start).num_minutes();
    if diff < 0 { diff + 24 * 60 } else { diff }
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Hours with one decimal place, the way the attendance form renders them.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

pub fn parse_required_time(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}
