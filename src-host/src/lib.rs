//! Tabpad host
//!
//! Headless bridge between a front-end and the notepad core:
//! - Front-end sends events, never state
//! - Every event is answered with the full view
//! - State never leaves the core

mod cli;
mod protocol;

use clap::Parser;
use std::io;

use tabpad_core::{Config, MemoryStore, Notepad};

pub use cli::Cli;
pub use protocol::{handle_line, serve, CommandResult};

pub fn run() -> anyhow::Result<()> {
    tabpad_core::init_logging();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(path) = cli.database {
        config.database_path = path;
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    if cli.in_memory {
        tracing::info!("Tabpad started with in-memory storage");
        let mut notepad = Notepad::with_store(config, MemoryStore::new());
        serve(&mut notepad, stdin, stdout)?;
    } else {
        tracing::info!(database = %config.database_path.display(), "Tabpad started");
        let mut notepad = Notepad::open(config)?;
        serve(&mut notepad, stdin, stdout)?;
    }

    tracing::info!("Input closed, exiting");
    Ok(())
}
