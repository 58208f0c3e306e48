//! Blur-time validation of time inputs.

use crate::utils::time::parse_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeValidation {
    Valid,
    Invalid,
    /// Empty values are neither marked nor cleared, matching the page.
    Skipped,
}

pub fn validate_time_value(value: &str) -> TimeValidation {
    if value.is_empty() {
        return TimeValidation::Skipped;
    }
    if parse_time(value).is_some() {
        TimeValidation::Valid
    } else {
        TimeValidation::Invalid
    }
}
