//! clockledger library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (ledger store, aggregator, config, export).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher: one handler per subcommand, all fed the
/// same config and invocation context.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::In => cli::commands::clock::handle_in(cli, cfg),
        Commands::Out => cli::commands::clock::handle_out(cli, cfg),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::Hours => cli::commands::hours::handle(cli, cfg),
        Commands::Who => cli::commands::report::handle_who(cli, cfg),
        Commands::AllHours => cli::commands::report::handle_all_hours(cli, cfg),
        Commands::Report { days } => cli::commands::report::handle_report(cli, cfg, *days),
        Commands::Adjust {
            target,
            delta,
            reason,
            display_name,
        } => cli::commands::adjust::handle(
            cli,
            cfg,
            target,
            delta,
            reason.as_deref(),
            display_name.as_deref(),
        ),
        Commands::Export { format, file } => {
            cli::commands::export::handle(cli, cfg, *format, file)
        }
        Commands::Purge { yes } => cli::commands::purge::handle(cli, cfg, *yes),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line DB override wins over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
