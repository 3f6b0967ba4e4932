//! rattendance library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use utils::date;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, day: NaiveDate) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, day),
        Commands::List => cli::commands::list::handle(&cli.command, cfg, day),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, cfg, day),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, day),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, day),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, day),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg, day),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(dir) = &cli.dir {
        cfg.data_dir = dir.clone();
    }

    let day = match &cli.date {
        Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
        None => date::today(),
    };

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, day)
}
