use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::hours;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::time::format_hours;

/// Offline work-hour computation for a check-in/check-out pair.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { start, end } = cmd {
        let worked = hours::work_hours(start, end)?;

        println!(
            "{} → {} = {} h",
            start,
            end,
            format_hours(hours::round1(worked))
        );

        let actual = hours::round1(hours::actual_hours(worked, cfg.break_minutes));
        let overtime = hours::round1(hours::overtime_hours(actual, cfg.standard_hours));
        println!("  actual:   {} h", format_hours(actual));
        println!("  overtime: {} h", format_hours(overtime));

        if worked > cfg.long_shift_hours {
            messages::warning("Long shift detected. Check your break times.");
        }
    }

    Ok(())
}
