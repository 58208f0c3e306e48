use super::model::{DayRow, get_headers};
use crate::errors::AppResult;
use csv::Writer;

/// Write the month's rows as CSV.
///
/// The browser original joined cells with bare commas; the csv writer
/// quotes embedded commas, quotes and newlines properly.
pub fn write_csv(path: &str, rows: &[DayRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(&[
            row.date.as_str(),
            row.check_in.as_str(),
            row.check_out.as_str(),
            row.work_hours.as_str(),
            row.actual_hours.as_str(),
            row.overtime_hours.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
