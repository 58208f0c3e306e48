use super::server_url;
use crate::api::{AttendanceApi, HttpApi, PageFileApi};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::controller::{Controller, ControllerSettings};
use crate::errors::AppResult;
use crate::ui::{messages, session};
use crate::utils::date::month_page_path;

/// Open the interactive attendance session.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { month } = &cli.command {
        let settings = ControllerSettings::from_config(cfg, month_page_path(month.as_deref()));

        match &cli.page_file {
            Some(file) => {
                let api = PageFileApi::new(file.clone());
                run_with(api, settings, &cfg.export_file)?;
            }
            None => {
                let api = HttpApi::new(&server_url(cli, cfg));
                run_with(api, settings, &cfg.export_file)?;
            }
        }
    }
    Ok(())
}

fn run_with<A: AttendanceApi>(
    api: A,
    settings: ControllerSettings,
    export_file: &str,
) -> AppResult<()> {
    let mut ctl = Controller::new(api, SystemClock, settings);

    // An unreachable server is not fatal: the session opens empty and the
    // user can still punch once the server comes back.
    if let Err(e) = ctl.load_form() {
        messages::warning(format!("Could not load the month page: {}", e));
    }

    session::run(&mut ctl, export_file)
}
