use super::load_month_form;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = &cli.command
    {
        let form = load_month_form(cli, cfg, month.as_deref())?;
        let file = file.clone().unwrap_or_else(|| cfg.export_file.clone());
        ExportLogic::export(&form, format, &file, *force)?;
    }
    Ok(())
}
