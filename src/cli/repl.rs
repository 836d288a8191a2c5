//! Interactive read loop.
//!
//! Prompts for an index destination, then loops reading
//! file-or-directory paths until the user quits with `q` (any case),
//! Ctrl-C or Ctrl-D. Every submission triggers one pipeline run.
//! Whatever ends the loop, the index session is closed before
//! returning.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::cli::output::{self, colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::{IndexingPipeline, ACCEPTED_EXTENSIONS};
use crate::core::storage::IndexSession;
use crate::core::types::IndexReport;

/// Run the interactive session
pub fn run(
    config: &Config,
    index_dir: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rl = DefaultEditor::new()?;

    let index_dir = match index_dir {
        Some(dir) => dir,
        None => prompt_index_dir(&mut rl, config)?,
    };

    let mut session = IndexSession::open(&index_dir).map_err(|e| {
        format!(
            "Cannot create index at '{}': {e}",
            index_dir.display()
        )
    })?;
    let mut pipeline = IndexingPipeline::new(config.indexing.max_file_size_mb);

    println!(
        "Indexing into {}",
        colors::file_path(&index_dir.display().to_string())
    );

    let outcome = prompt_loop(&mut rl, &mut pipeline, &mut session, format);

    let total = session.count().unwrap_or(0);

    // Close-on-exit: the store handle is released exactly once,
    // whatever ended the loop.
    if let Err(e) = session.close() {
        output::print_error(&format!("Failed to close index: {e}"));
    } else if format == OutputFormat::Human {
        println!(
            "{} with {} documents",
            colors::success("Index closed"),
            colors::number(&total.to_string())
        );
    }

    outcome
}

fn prompt_index_dir(
    rl: &mut DefaultEditor,
    config: &Config,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    println!(
        "Enter the path where the index will be created (empty for {}):",
        colors::file_path(&config.storage.index_dir.display().to_string())
    );

    let line = rl.readline("index dir> ")?;
    let line = line.trim();

    if line.is_empty() {
        Ok(config.storage.index_dir.clone())
    } else {
        Ok(PathBuf::from(line))
    }
}

fn prompt_loop(
    rl: &mut DefaultEditor,
    pipeline: &mut IndexingPipeline,
    session: &mut IndexSession,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Enter a file or directory to add to the index (q to quit).");
    println!(
        "{}",
        colors::dim(&format!(
            "Accepted file types: {}",
            ACCEPTED_EXTENSIONS
                .iter()
                .map(|ext| format!(".{ext}"))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    );

    loop {
        match rl.readline("docdex> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("q") {
                    break;
                }

                let _ = rl.add_history_entry(line);

                match pipeline.run(session, line) {
                    Ok(report) => print_report(&report, format),
                    Err(e) if e.is_fatal() => return Err(e.into()),
                    Err(e) => output::print_error(&format!("Error indexing {line}: {e}")),
                }
            }
            // Ctrl-C / Ctrl-D quit like `q`; the caller still closes
            // the session.
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn print_report(report: &IndexReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => output::print_error(&format!("Failed to serialize report: {e}")),
        },
        OutputFormat::Human => {
            for skip in &report.skipped {
                output::print_warning(&format!("Skipped {}: {}", skip.path.display(), skip.reason));
            }
            println!(
                "{} {} documents in {}",
                colors::success("Added"),
                colors::number(&report.documents_added.to_string()),
                colors::number(&format_duration(report.duration_ms as f64 / 1000.0))
            );
        }
    }
}
