//! servdash library root.
//! Exposes the CLI parser, the high-level run() function and the query,
//! cache and export layers behind them.

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::cli::{FilterArgs, Session};
use crate::config::Config;
use crate::core::Dashboard;
use crate::db::Backend;
use crate::errors::AppResult;
use clap::Parser;
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // `config` must work even when the database settings are broken
    if let Commands::Config { .. } = &cli.command {
        return cli::commands::config::handle(&cli.command, cfg, cli.sqlite.as_deref());
    }

    let backend = Backend::resolve(cli.sqlite.clone())?;
    debug!(dialect = ?backend.dialect(), "backend resolved");

    let defaults = FilterArgs::from_cli(cli);
    let session = Session::new(cfg, Dashboard::from_config(cfg, backend), defaults);

    match &cli.command {
        Commands::Interactive => cli::commands::interactive::handle(&session),
        cmd => {
            let filter = defaults.resolve(cfg, utils::date::today())?;
            cli::commands::run_view(cmd, &session, &filter)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ .env first, so DB_* can come from it
    dotenvy::dotenv().ok();

    // 2️⃣ parse CLI
    let cli = Cli::parse();

    // 3️⃣ load config once
    let cfg = Config::load()?;

    dispatch(&cli, &cfg)
}
