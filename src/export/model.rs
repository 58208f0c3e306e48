// src/export/model.rs

use crate::models::field::{FieldId, FieldKind};
use crate::models::form::Form;
use serde::Serialize;

/// Flat per-day row, one line of the exported table.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayRow {
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub work_hours: String,
    pub actual_hours: String,
    pub overtime_hours: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "check_in",
        "check_out",
        "work_hours",
        "actual_hours",
        "overtime_hours",
    ]
}

/// One row per date present in the form, current values as rendered.
pub fn rows_from_form(form: &Form) -> Vec<DayRow> {
    let value = |kind: FieldKind, date: &str| {
        form.value(&FieldId::new(kind, date))
            .unwrap_or_default()
            .to_string()
    };

    form.dates()
        .iter()
        .map(|date| DayRow {
            date: date.clone(),
            check_in: value(FieldKind::CheckIn, date),
            check_out: value(FieldKind::CheckOut, date),
            work_hours: value(FieldKind::WorkHours, date),
            actual_hours: value(FieldKind::ActualHours, date),
            overtime_hours: value(FieldKind::OvertimeHours, date),
        })
        .collect()
}
