//! Work-hour arithmetic for a single day.

use crate::errors::{AppError, AppResult};
use crate::utils::time::{minutes_between_wrapping, parse_time};

/// Round to one decimal place, the precision the form fields carry.
pub fn round1(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Elapsed hours between check-in and check-out.
///
/// A check-out earlier than the check-in means the shift crossed midnight:
/// one day is added to the end, it is never an error.
pub fn work_hours(check_in: &str, check_out: &str) -> AppResult<f64> {
    let start = parse_time(check_in).ok_or_else(|| AppError::InvalidTime(check_in.to_string()))?;
    let end = parse_time(check_out).ok_or_else(|| AppError::InvalidTime(check_out.to_string()))?;
    Ok(minutes_between_wrapping(start, end) as f64 / 60.0)
}

/// Hours actually worked once the break deduction is taken out.
pub fn actual_hours(work_hours: f64, break_minutes: i64) -> f64 {
    (work_hours - break_minutes as f64 / 60.0).max(0.0)
}

/// Hours beyond the standard working day.
pub fn overtime_hours(actual: f64, standard_hours: f64) -> f64 {
    (actual - standard_hours).max(0.0)
}
