//! Docdex entry point
//!
//! Interactive terminal indexer. Prompts for an index destination,
//! then reads file-or-directory paths until the user quits.
//!
//! # Examples
//!
//! ```bash
//! # Prompt for everything
//! docdex
//!
//! # Index destination from the command line, JSON reports
//! docdex ./my-index --format json
//! ```

use clap::Parser;
use docdex::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so they never interleave with the prompt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docdex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
