//! Batch loop: one status line per input, failures isolated, summary at the end.

use crate::processor::Processor;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::PathBuf;

/// Counts for a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub attempted: usize,
    pub succeeded: usize,
    /// Normalized paths of the inputs that failed, in input order.
    pub failed: Vec<PathBuf>,
}

/// Process every path in order and report to `out`.
///
/// A failing input is reported and skipped; only a failure to write to `out` aborts the loop.
/// With no paths nothing is written and an empty summary is returned.
pub fn run_batch<I, S, W>(processor: &Processor, paths: I, out: &mut W) -> io::Result<BatchSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    W: Write,
{
    let mut summary = BatchSummary::default();
    for raw in paths {
        let raw = raw.as_ref();
        summary.attempted += 1;
        match processor.process_file(raw) {
            Ok(done) => {
                summary.succeeded += 1;
                writeln!(
                    out,
                    "✓ {} -> {} ({})",
                    done.source_name(),
                    done.sidecar_name(),
                    done.digest
                )?;
            }
            Err(e) => {
                tracing::warn!(path = %e.path().display(), error = %e, "skipping input");
                summary.failed.push(e.path().to_path_buf());
                writeln!(out, "error: {e}")?;
            }
        }
    }
    if summary.attempted > 0 {
        writeln!(
            out,
            "\ndone: {} of {} digest file(s) written",
            summary.succeeded, summary.attempted
        )?;
    }
    Ok(summary)
}
