//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Multi-tab notepad host. Reads UI events as JSON lines on stdin and writes
/// one view per event to stdout.
#[derive(Debug, Parser)]
#[command(name = "tabpad")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Database file, overriding the config
    #[arg(long, conflicts_with = "in_memory")]
    pub database: Option<PathBuf>,

    /// Keep everything in memory; nothing survives exit
    #[arg(long)]
    pub in_memory: bool,
}
