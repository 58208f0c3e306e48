mod common;
use common::new_controller;
use punchclock::core::calculator::hours;
use punchclock::models::field::{FieldId, FieldKind};
use punchclock::models::notification::Severity;

const DATE: &str = "2024-05-01";

fn id(kind: FieldKind) -> FieldId {
    FieldId::new(kind, DATE)
}

#[test]
fn test_standard_day_is_eight_and_a_half_hours() {
    let (mut ctl, _api, _clock) = new_controller();

    ctl.field_changed(&id(FieldKind::CheckIn), "09:00");
    ctl.field_changed(&id(FieldKind::CheckOut), "17:30");

    assert_eq!(ctl.form().value(&id(FieldKind::WorkHours)), Some("8.5"));
    // 60 minutes of break deducted, nothing beyond the standard day
    assert_eq!(ctl.form().value(&id(FieldKind::ActualHours)), Some("7.5"));
    assert_eq!(ctl.form().value(&id(FieldKind::OvertimeHours)), Some("0.0"));
}

#[test]
fn test_shift_crossing_midnight_adds_a_day() {
    let (mut ctl, _api, _clock) = new_controller();

    ctl.field_changed(&id(FieldKind::CheckIn), "22:00");
    ctl.field_changed(&id(FieldKind::CheckOut), "06:00");

    assert_eq!(ctl.form().value(&id(FieldKind::WorkHours)), Some("8.0"));
}

#[test]
fn test_long_shift_raises_a_warning() {
    let (mut ctl, _api, _clock) = new_controller();

    ctl.field_changed(&id(FieldKind::CheckIn), "08:00");
    ctl.field_changed(&id(FieldKind::CheckOut), "21:00");

    assert_eq!(ctl.form().value(&id(FieldKind::WorkHours)), Some("13.0"));

    let notice = ctl.notice().expect("long shift must warn");
    assert_eq!(notice.severity, Severity::Warning);
    assert!(notice.message.contains("Long shift"));
}

#[test]
fn test_half_open_pair_computes_nothing() {
    let (mut ctl, _api, _clock) = new_controller();

    ctl.field_changed(&id(FieldKind::CheckIn), "09:00");

    assert_eq!(ctl.form().value(&id(FieldKind::WorkHours)), None);
}

#[test]
fn test_work_hours_arithmetic() {
    assert_eq!(hours::work_hours("09:00", "17:30").unwrap(), 8.5);
    assert_eq!(hours::work_hours("22:00", "06:00").unwrap(), 8.0);
    assert_eq!(hours::work_hours("09:00", "09:00").unwrap(), 0.0);
    assert!(hours::work_hours("nine", "17:00").is_err());
}

#[test]
fn test_actual_and_overtime_hours() {
    let actual = hours::actual_hours(9.5, 60);
    assert_eq!(actual, 8.5);
    assert_eq!(hours::overtime_hours(actual, 8.0), 0.5);

    // The break never pushes actual hours below zero
    assert_eq!(hours::actual_hours(0.5, 60), 0.0);
    assert_eq!(hours::overtime_hours(4.0, 8.0), 0.0);
}

#[test]
fn test_round1_keeps_one_decimal() {
    assert_eq!(hours::round1(8.333), 8.3);
    assert_eq!(hours::round1(8.25), 8.3);
    assert_eq!(hours::round1(8.0), 8.0);
}
