use super::fs_utils::ensure_writable;
use super::model::rows_from_form;
use super::{ExportFormat, notify_export_success};
use crate::errors::AppResult;
use crate::models::form::Form;
use std::path::Path;

/// High-level export entry point shared by the CLI and the session.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(form: &Form, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = rows_from_form(form);

        match format {
            ExportFormat::Csv => super::csv::write_csv(file, &rows)?,
            ExportFormat::Json => super::json::write_json(file, &rows)?,
        }

        notify_export_success(format.as_str().to_uppercase().as_str(), path);
        Ok(())
    }
}
