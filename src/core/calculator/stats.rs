//! Monthly aggregation over the rendered form.

use crate::models::field::FieldKind;
use crate::models::form::Form;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlySummary {
    pub total_actual_hours: f64,
    pub total_overtime_hours: f64,
    pub worked_days: u32,
    pub average_actual_hours: f64,
}

/// A pure reduction over the currently rendered values, no hidden state.
/// Days count as worked when their actual hours are positive; only those
/// positive values enter the total. Overtime sums everything.
pub fn monthly_summary(form: &Form) -> MonthlySummary {
    let mut summary = MonthlySummary::default();

    for value in form.values_of_kind(&FieldKind::ActualHours) {
        let hours: f64 = value.parse().unwrap_or(0.0);
        if hours > 0.0 {
            summary.total_actual_hours += hours;
            summary.worked_days += 1;
        }
    }

    for value in form.values_of_kind(&FieldKind::OvertimeHours) {
        let hours: f64 = value.parse().unwrap_or(0.0);
        summary.total_overtime_hours += hours;
    }

    if summary.worked_days > 0 {
        summary.average_actual_hours = summary.total_actual_hours / summary.worked_days as f64;
    }

    summary
}
