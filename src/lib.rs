//! gymattend library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let today = resolve_today(cli)?;

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg, today),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Member { .. } => cli::commands::member::handle(&cli.command, cfg),
        Commands::Checkin { .. } => cli::commands::checkin::handle(&cli.command, cfg, today),
        Commands::Confirm { .. } => cli::commands::confirm::handle(&cli.command, cfg, today),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg, today),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg, today),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, today),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// The effective "today": the hidden --today override (tests), or the
/// wall clock.
fn resolve_today(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.today {
        Some(s) => utils::date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(utils::date::today()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1) parse CLI
    let cli = Cli::parse();

    // 2) load config ONCE
    let mut cfg = Config::load();

    // 3) apply the --db override, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4) hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
