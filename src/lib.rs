//! punchclock library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Punch { .. } => cli::commands::punch::handle(cli, cfg),
        Commands::Save { .. } => cli::commands::save::handle(cli, cfg),
        Commands::Hours { .. } => cli::commands::hours::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Session { .. } => cli::commands::session::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ install the log subscriber (RUST_LOG-driven, off by default)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    // 2️⃣ parse CLI
    let cli = Cli::parse();

    // 3️⃣ load config ONCE
    let mut cfg = Config::load();

    // 4️⃣ apply the server override from the command line
    if let Some(server) = &cli.server {
        cfg.server_url = server.clone();
    }

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
