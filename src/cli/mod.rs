//! CLI adapter for docdex
//!
//! Parses arguments, loads configuration, and hands control to the
//! interactive read loop. Depends on `core/` only.

pub mod output;
pub mod repl;

use clap::Parser;
use std::path::PathBuf;

use crate::core::config::Config;

/// Docdex - Interactive Text-File Indexer
///
/// Walks the paths you submit, indexes every `.htm`, `.html`, `.xml`
/// and `.txt` file into a persistent Tantivy index, and reports how
/// many documents each submission added.
#[derive(Parser, Debug)]
#[command(name = "docdex")]
#[command(version)]
#[command(about = "Interactive text-file indexer", long_about = None)]
pub struct Cli {
    /// Directory where the index will be created (prompted for when
    /// omitted; any previous index there is replaced)
    pub index_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Output format for per-run reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    config.log_config();

    repl::run(&config, cli.index_dir, cli.format)
}
