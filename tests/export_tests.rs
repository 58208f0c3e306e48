mod common;
use common::{page_html, temp_out};
use punchclock::api::page::form_from_page;
use punchclock::export::{csv::write_csv, json::write_json, rows_from_form};
use punchclock::models::field::{FieldId, FieldKind};
use std::fs;

fn sample_form() -> punchclock::models::form::Form {
    form_from_page(&page_html(&[
        ("check_in_2024-05-01", "09:00"),
        ("check_out_2024-05-01", "17:30"),
        ("work_hours_2024-05-01", "8.5"),
        ("actual_hours_2024-05-01", "7.5"),
        ("overtime_hours_2024-05-01", "0.0"),
        ("check_in_2024-05-02", "22:00"),
        ("check_out_2024-05-02", "06:00"),
    ]))
}

#[test]
fn test_rows_cover_every_date_in_order() {
    let rows = rows_from_form(&sample_form());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-05-01");
    assert_eq!(rows[0].check_in, "09:00");
    assert_eq!(rows[0].work_hours, "8.5");
    assert_eq!(rows[1].date, "2024-05-02");
    assert_eq!(rows[1].work_hours, "", "missing fields export as blanks");
}

#[test]
fn test_csv_export_writes_header_and_rows() {
    let out = temp_out("csv_header_rows", "csv");
    let rows = rows_from_form(&sample_form());

    write_csv(&out, &rows).expect("csv export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,check_in,check_out,work_hours,actual_hours,overtime_hours")
    );
    assert_eq!(lines.next(), Some("2024-05-01,09:00,17:30,8.5,7.5,0.0"));
    assert_eq!(lines.next(), Some("2024-05-02,22:00,06:00,,,"));
}

#[test]
fn test_csv_export_quotes_embedded_commas_and_quotes() {
    let out = temp_out("csv_quoting", "csv");
    let mut form = punchclock::models::form::Form::new();
    form.set_value(
        &FieldId::new(FieldKind::CheckIn, "2024-05-01"),
        "09:00, give or take",
    );
    form.set_value(
        &FieldId::new(FieldKind::CheckOut, "2024-05-01"),
        r#"the "late" one"#,
    );

    write_csv(&out, &rows_from_form(&form)).expect("csv export");

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains(r#""09:00, give or take""#));
    assert!(content.contains(r#""the ""late"" one""#));
    // Still exactly one header and one data row
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_json_export_round_trips() {
    let out = temp_out("json_export", "json");
    let rows = rows_from_form(&sample_form());

    write_json(&out, &rows).expect("json export");

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(2));
    assert_eq!(parsed[0]["check_in"], "09:00");
    assert_eq!(parsed[1]["date"], "2024-05-02");
}
