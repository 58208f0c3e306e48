use super::load_month_form;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::stats::monthly_summary;
use crate::errors::AppResult;
use crate::utils::table::{Card, render_cards};

/// Print the four-card monthly summary.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { month } = &cli.command {
        let form = load_month_form(cli, cfg, month.as_deref())?;
        let summary = monthly_summary(&form);

        let cards = [
            Card::new("Total actual", format!("{:.1} h", summary.total_actual_hours)),
            Card::new(
                "Total overtime",
                format!("{:.1} h", summary.total_overtime_hours),
            ),
            Card::new("Worked days", summary.worked_days.to_string()),
            Card::new(
                "Avg actual",
                format!("{:.1} h", summary.average_actual_hours),
            ),
        ];

        println!();
        print!("{}", render_cards(&cards));
    }

    Ok(())
}
