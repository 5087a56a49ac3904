//! CLI for sidehash.

use anyhow::{Context, Result};
use clap::Parser;
use sidehash_core::config::{self, SidehashConfig};
use sidehash_core::source::{ArgsSource, Collected, NoSource, PathSource, PromptSource};
use sidehash_core::{run_batch, Algorithm, Processor};
use std::io::{self, Write};
use std::path::PathBuf;

const USAGE: &str = "\
usage: sidehash <file1> [file2] ...
example: sidehash document.pdf image.png
Run without arguments from a terminal to enter paths interactively.";

/// Write the digest of each file to `<file>.<algorithm>` next to it.
#[derive(Debug, Parser)]
#[command(name = "sidehash", version)]
#[command(about = "Write file digests to sidecar files", long_about = None)]
pub struct Cli {
    /// Files to hash. With none, paths are read from an interactive prompt.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Digest algorithm (md5, sha256, blake3). Overrides the config file.
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algorithm: Option<Algorithm>,

    /// Read chunk size in bytes. Overrides the config file.
    #[arg(long, value_name = "BYTES", value_parser = parse_chunk_size)]
    pub chunk_size: Option<usize>,
}

fn parse_chunk_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("chunk size must be positive".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    /// Merge CLI overrides over the loaded config.
    pub fn processor(&self, cfg: &SidehashConfig) -> Processor {
        Processor::new(
            self.algorithm.unwrap_or(cfg.algorithm),
            self.chunk_size.unwrap_or(cfg.chunk_size),
        )
    }

    /// Args when given; otherwise the terminal prompt, if there is a terminal.
    fn into_source(self) -> Box<dyn PathSource> {
        if !self.paths.is_empty() {
            return Box::new(ArgsSource::new(self.paths));
        }
        match PromptSource::stdin() {
            Some(prompt) => Box::new(prompt),
            None => Box::new(NoSource),
        }
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let processor = cli.processor(&cfg);
    let mut source = cli.into_source();
    let stdout = io::stdout();
    run_with_source(&processor, source.as_mut(), &mut stdout.lock())
}

/// Collect paths from `source` and run the batch, or explain usage when there is no input.
pub fn run_with_source<W: Write>(
    processor: &Processor,
    source: &mut dyn PathSource,
    out: &mut W,
) -> Result<()> {
    let paths = match source.collect().context("collect input paths")? {
        Collected::Unavailable => {
            writeln!(out, "{USAGE}")?;
            return Ok(());
        }
        Collected::Paths(paths) => paths,
    };
    if paths.is_empty() {
        writeln!(out, "no files selected.")?;
        return Ok(());
    }

    tracing::info!(
        count = paths.len(),
        algorithm = %processor.algorithm(),
        chunk_size = processor.chunk_size(),
        "starting batch"
    );
    let summary = run_batch(processor, &paths, out)?;
    tracing::info!(
        succeeded = summary.succeeded,
        failed = summary.failed.len(),
        "batch finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests;
