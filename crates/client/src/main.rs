//! Terminal client for the grid simulation.
//!
//! Composition root: load configuration, set up file logging, start the
//! session, then hand the terminal to the input loop.

mod app;
mod config;
mod input;
mod logging;
mod presentation;

use anyhow::{Context, Result};
use runtime::{RuntimeConfig, Session};

use crate::app::App;
use crate::config::CliConfig;
use crate::presentation::{TerminalGuard, terminal};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let runtime_config = RuntimeConfig::from_env();
    let cli_config = CliConfig::from_env();

    let log_file = logging::setup_logging()?;
    tracing::info!("Starting cellar client");
    tracing::info!("Map: {}", runtime_config.map_path.display());
    tracing::info!("Seed: {}", runtime_config.seed);

    let session = Session::start(&runtime_config).context("failed to start session")?;

    let result = {
        let mut tui = terminal::init()?;
        let _guard = TerminalGuard;
        tracing::debug!("Terminal initialized");
        App::new(session, cli_config).run(&mut tui)
    };
    if let Err(e) = &result {
        tracing::error!("Client exited with error: {:#}", e);
        eprintln!("See {} for details.", log_file.display());
    }
    result
}
