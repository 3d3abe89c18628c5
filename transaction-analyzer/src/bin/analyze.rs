//! Transaction analyzer CLI
//!
//! Usage:
//! ```bash
//! transaction-analyzer transactions.jsonl > results.jsonl
//! cat transactions.jsonl | transaction-analyzer
//! ANALYZER_CONFIG=analyzer.toml transaction-analyzer -
//! ```

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::PathBuf;
use transaction_analyzer::{analyze_lines, Config, TransactionAnalyzer};

/// Analyze JSON-lines transactions and print one JSON result per line
#[derive(Parser)]
#[command(name = "transaction-analyzer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON-lines input, '-' or absent for stdin
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries results
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    tracing::info!(service = %config.service_name, "Starting transaction analyzer");

    let input: Box<dyn BufRead> = match cli.input {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(
            File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let analyzer = TransactionAnalyzer::new(config.limits);
    let summary = analyze_lines(&analyzer, input, BufWriter::new(io::stdout().lock()))
        .context("Analysis aborted")?;

    tracing::info!(
        analyzed = summary.analyzed,
        malformed = summary.malformed.len(),
        "Analysis finished"
    );

    if !summary.is_clean() {
        for bad in &summary.malformed {
            eprintln!("line {}: {}", bad.line, bad.error);
        }
        bail!("{} transaction(s) could not be parsed", summary.malformed.len());
    }
    Ok(())
}
