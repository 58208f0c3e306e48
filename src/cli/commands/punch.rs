use super::server_url;
use crate::api::HttpApi;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::controller::{Controller, ControllerSettings};
use crate::errors::{AppError, AppResult};
use crate::models::field::{FieldId, FieldKind};
use crate::ui::messages;
use crate::utils::date::{self, month_page_path};
use crate::utils::formatting::display_or_placeholder;

/// Record a one-shot punch on the server.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind, date } = &cli.command {
        //
        // 1. Resolve the date (default: today)
        //
        let date_str = match date {
            Some(d) => {
                date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
                d.clone()
            }
            None => date::today().format("%Y-%m-%d").to_string(),
        };

        //
        // 2. Build a controller against the live server
        //
        let settings = ControllerSettings::from_config(cfg, month_page_path(None));
        let api = HttpApi::new(&server_url(cli, cfg));
        let mut ctl = Controller::new(api, SystemClock, settings);

        //
        // 3. Punch
        //
        let field = kind.field_kind();
        let ok = ctl.punch(&field, &date_str);

        if !ok {
            let msg = ctl
                .notice()
                .map(|n| n.message.clone())
                .unwrap_or_else(|| "punch failed".to_string());
            return Err(AppError::Api(msg));
        }

        if let Some(n) = ctl.notice() {
            messages::notify(n);
        }

        //
        // 4. Wait out the reload delay, then show the authoritative state
        //
        std::thread::sleep(ctl.settings().resync_delay);
        ctl.tick();

        for k in [FieldKind::CheckIn, FieldKind::CheckOut] {
            let value = ctl
                .form()
                .value(&FieldId::new(k.clone(), &date_str))
                .unwrap_or_default()
                .to_string();
            println!("  {:<10} {}", k.fk_as_str(), display_or_placeholder(&value));
        }
    }

    Ok(())
}
