//! JSON-lines analysis
//!
//! One transaction per input line, one result per output line. Blank lines
//! are skipped; malformed lines are recorded and do not stop the run.

use crate::analyzer::TransactionAnalyzer;
use crate::types::Transaction;
use crate::Result;
use std::io::{BufRead, Write};
use tracing::warn;

/// Input line that could not be parsed as a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number
    pub line: usize,

    /// Parser message
    pub error: String,
}

/// Outcome of a JSON-lines run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Transactions analyzed
    pub analyzed: usize,

    /// Lines skipped as malformed
    pub malformed: Vec<LineError>,
}

impl StreamSummary {
    /// Every non-blank line was a valid transaction
    pub fn is_clean(&self) -> bool {
        self.malformed.is_empty()
    }
}

/// Analyze every transaction in `input`, writing results to `output`
///
/// Only read and write failures abort the run.
pub fn analyze_lines<R, W>(
    analyzer: &TransactionAnalyzer,
    input: R,
    mut output: W,
) -> Result<StreamSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = StreamSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let tx: Transaction = match serde_json::from_str(&line) {
            Ok(tx) => tx,
            Err(e) => {
                warn!(line = index + 1, error = %e, "Skipping malformed transaction");
                summary.malformed.push(LineError {
                    line: index + 1,
                    error: e.to_string(),
                });
                continue;
            }
        };

        serde_json::to_writer(&mut output, &analyzer.analyze(&tx))?;
        writeln!(output)?;
        summary.analyzed += 1;
    }

    output.flush()?;
    Ok(summary)
}
