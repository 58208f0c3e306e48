mod common;
use common::{page_html, pcl, temp_out};
use predicates::prelude::*;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Write a sample month page to a temp file and return its path.
fn setup_page_file(name: &str, inputs: &[(&str, &str)]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_page.html", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, page_html(inputs)).expect("write page file");
    p
}

#[test]
fn test_hours_standard_day() {
    pcl()
        .args(["hours", "--in", "09:00", "--out", "17:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.5 h"));
}

#[test]
fn test_hours_across_midnight() {
    pcl()
        .args(["hours", "--in", "22:00", "--out", "06:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.0 h"));
}

#[test]
fn test_hours_long_shift_warns() {
    pcl()
        .args(["hours", "--in", "08:00", "--out", "21:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("13.0 h"))
        .stdout(predicate::str::contains("Long shift"));
}

#[test]
fn test_hours_rejects_bad_time() {
    pcl()
        .args(["hours", "--in", "nine", "--out", "17:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn test_stats_from_a_saved_page() {
    let page = setup_page_file(
        "cli_stats",
        &[
            ("actual_hours_2024-05-01", "8.0"),
            ("actual_hours_2024-05-02", "7.5"),
            ("actual_hours_2024-05-03", "0"),
            ("actual_hours_2024-05-04", "8.0"),
            ("overtime_hours_2024-05-04", "1.0"),
        ],
    );

    pcl()
        .args(["stats", "--month", "2024-05", "--page-file", &page])
        .assert()
        .success()
        .stdout(predicate::str::contains("23.5 h"))
        .stdout(predicate::str::contains("Worked days"))
        .stdout(predicate::str::contains("7.8 h"));
}

#[test]
fn test_stats_rejects_bad_month() {
    pcl()
        .args(["stats", "--month", "May-2024", "--page-file", "/dev/null"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_export_csv_from_a_saved_page() {
    let page = setup_page_file(
        "cli_export_csv",
        &[
            ("check_in_2024-05-01", "09:00"),
            ("check_out_2024-05-01", "17:30"),
            ("work_hours_2024-05-01", "8.5"),
        ],
    );
    let out = temp_out("cli_export_csv", "csv");

    pcl()
        .args([
            "export",
            "--month",
            "2024-05",
            "--file",
            &out,
            "--force",
            "--page-file",
            &page,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,check_in,check_out"));
    assert!(content.contains("2024-05-01,09:00,17:30,8.5"));
}

#[test]
fn test_export_json_from_a_saved_page() {
    let page = setup_page_file("cli_export_json", &[("check_in_2024-05-01", "09:00")]);
    let out = temp_out("cli_export_json", "json");

    pcl()
        .args([
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--force",
            "--page-file",
            &page,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"check_in\": \"09:00\""));
}

#[test]
fn test_help_lists_the_subcommands() {
    pcl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("punch"))
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains("export"));
}
