mod common;
use common::new_controller;
use punchclock::models::notification::{Notification, Severity};
use std::time::Duration;

#[test]
fn test_showing_a_notification_replaces_the_previous_one() {
    let (mut ctl, _api, _clock) = new_controller();

    ctl.show_notification(Notification::info("first"));
    ctl.show_notification(Notification::success("second"));

    let notice = ctl.notice().expect("one notification visible");
    assert_eq!(notice.message, "second");
    assert_eq!(notice.severity, Severity::Success);
}

#[test]
fn test_notification_dismisses_after_three_seconds() {
    let (mut ctl, _api, clock) = new_controller();

    ctl.show_notification(Notification::info("transient"));

    clock.advance(Duration::from_millis(2999));
    ctl.tick();
    assert!(ctl.notice().is_some());

    clock.advance(Duration::from_millis(1));
    ctl.tick();
    assert!(ctl.notice().is_none());
}

#[test]
fn test_replacement_restarts_the_dismissal_clock() {
    let (mut ctl, _api, clock) = new_controller();

    ctl.show_notification(Notification::info("first"));
    clock.advance(Duration::from_millis(2000));

    ctl.show_notification(Notification::warning("second"));
    clock.advance(Duration::from_millis(2000));
    ctl.tick();

    // 4s after the first, but only 2s after the replacement
    let notice = ctl.notice().expect("replacement stays its full lifetime");
    assert_eq!(notice.message, "second");

    clock.advance(Duration::from_millis(1000));
    ctl.tick();
    assert!(ctl.notice().is_none());
}

#[test]
fn test_severities_map_to_their_labels() {
    assert_eq!(Severity::Info.sev_as_str(), "info");
    assert_eq!(Severity::Success.sev_as_str(), "success");
    assert_eq!(Severity::Warning.sev_as_str(), "warning");
    assert_eq!(Severity::Danger.sev_as_str(), "danger");
}
