use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with its defaults
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing punchclock…");

    Config::init_all(cli.server.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎉 punchclock initialization completed!");
    Ok(())
}
