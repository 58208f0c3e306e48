use super::server_url;
use crate::api::HttpApi;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::controller::{Controller, ControllerSettings};
use crate::errors::{AppError, AppResult};
use crate::models::field::{FieldId, FieldKind};
use crate::models::notification::Severity;
use crate::ui::messages;
use crate::utils::date::{self, month_page_path};

/// Save one field value to the server, bypassing the debounce: an explicit
/// `save` is already an intentional action.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Save { date, field, value } = &cli.command {
        date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        if field.is_empty() || field.contains(char::is_whitespace) {
            return Err(AppError::InvalidField(field.clone()));
        }
        let id = FieldId::new(FieldKind::fk_from_str(field), date);

        let settings = ControllerSettings::from_config(cfg, month_page_path(None));
        let api = HttpApi::new(&server_url(cli, cfg));
        let mut ctl = Controller::new(api, SystemClock, settings);

        ctl.field_changed(&id, value);
        ctl.field_blurred(&id);

        // A failed validation is a warning, the save still goes out; the
        // server owns the data model.
        if ctl.form().is_invalid(&id)
            && let Some(n) = ctl.notice()
        {
            messages::notify(n);
        }

        ctl.submit_all();

        match ctl.notice() {
            Some(n) if n.severity == Severity::Danger => {
                return Err(AppError::Api(n.message.clone()));
            }
            Some(n) => messages::notify(n),
            None => {}
        }
    }

    Ok(())
}
