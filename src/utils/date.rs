use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM` month selector.
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&(s.to_string() + "-01"), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}

/// Server page path for a month: the root path renders the current month,
/// any other month lives under the attendance prefix.
pub fn month_page_path(month: Option<&str>) -> String {
    match month {
        Some(m) => format!("/attendance/{}", m),
        None => "/".to_string(),
    }
}
