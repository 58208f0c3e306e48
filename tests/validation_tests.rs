mod common;
use common::new_controller;
use punchclock::models::field::{FieldId, FieldKind};
use punchclock::models::notification::Severity;

const DATE: &str = "2024-05-01";

#[test]
fn test_invalid_time_marks_field_and_warns_once() {
    let (mut ctl, _api, _clock) = new_controller();
    let id = FieldId::new(FieldKind::CheckIn, DATE);

    ctl.field_changed(&id, "9 in the morning");
    ctl.field_blurred(&id);

    assert!(ctl.form().is_invalid(&id));

    // Single-slot surface: the one visible notification is the warning
    let notice = ctl.notice().expect("invalid input must warn");
    assert_eq!(notice.severity, Severity::Warning);
    assert!(notice.message.contains("HH:MM"));
}

#[test]
fn test_valid_time_clears_the_marker() {
    let (mut ctl, _api, _clock) = new_controller();
    let id = FieldId::new(FieldKind::CheckIn, DATE);

    ctl.field_changed(&id, "99:99");
    ctl.field_blurred(&id);
    assert!(ctl.form().is_invalid(&id));

    ctl.field_changed(&id, "09:15");
    ctl.field_blurred(&id);
    assert!(!ctl.form().is_invalid(&id));
}

#[test]
fn test_empty_value_leaves_the_marker_untouched() {
    let (mut ctl, _api, _clock) = new_controller();
    let id = FieldId::new(FieldKind::CheckOut, DATE);

    ctl.field_changed(&id, "later");
    ctl.field_blurred(&id);
    assert!(ctl.form().is_invalid(&id));

    ctl.field_changed(&id, "");
    ctl.field_blurred(&id);
    assert!(ctl.form().is_invalid(&id), "blur on empty must not validate");
}

#[test]
fn test_non_time_fields_are_not_validated() {
    let (mut ctl, _api, _clock) = new_controller();
    let id = FieldId::new(FieldKind::WorkHours, DATE);

    ctl.field_changed(&id, "not hours");
    ctl.field_blurred(&id);

    assert!(!ctl.form().is_invalid(&id));
    assert!(ctl.notice().is_none());
}

#[test]
fn test_edge_of_day_times_are_valid() {
    let (mut ctl, _api, _clock) = new_controller();
    let id = FieldId::new(FieldKind::CheckIn, DATE);

    for value in ["00:00", "23:59"] {
        ctl.field_changed(&id, value);
        ctl.field_blurred(&id);
        assert!(!ctl.form().is_invalid(&id), "{value} must be valid");
    }

    ctl.field_changed(&id, "24:00");
    ctl.field_blurred(&id);
    assert!(ctl.form().is_invalid(&id), "24:00 must be rejected");
}
