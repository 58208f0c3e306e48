pub mod config;
pub mod export;
pub mod hours;
pub mod init;
pub mod punch;
pub mod save;
pub mod session;
pub mod stats;

use crate::api::{AttendanceApi, HttpApi};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::form::Form;
use crate::utils::date::{month_page_path, parse_month};

/// Resolve the server base URL; the CLI override wins over the config.
pub(crate) fn server_url(cli: &Cli, cfg: &Config) -> String {
    cli.server.clone().unwrap_or_else(|| cfg.server_url.clone())
}

/// Load the month's form view-model, from the network or (test hook) from a
/// saved page file.
pub(crate) fn load_month_form(cli: &Cli, cfg: &Config, month: Option<&str>) -> AppResult<Form> {
    if let Some(m) = month
        && parse_month(m).is_none()
    {
        return Err(AppError::InvalidDate(m.to_string()));
    }

    let html = match &cli.page_file {
        Some(file) => std::fs::read_to_string(file)?,
        None => HttpApi::new(&server_url(cli, cfg)).fetch_page(&month_page_path(month))?,
    };

    Ok(crate::api::page::form_from_page(&html))
}
