use super::model::DayRow;
use crate::errors::{AppError, AppResult};

/// Write the month's rows as pretty-printed JSON.
pub fn write_json(path: &str, rows: &[DayRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {}", e)))?;
    std::fs::write(path, json)?;
    Ok(())
}
