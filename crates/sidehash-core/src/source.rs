//! Where input paths come from: command-line arguments or an interactive prompt.

use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal, Write};

/// Result of asking a source for paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    /// Zero or more raw paths, in the order given. Names need not be UTF-8.
    Paths(Vec<OsString>),
    /// The source cannot be used in this environment.
    Unavailable,
}

/// Capability that yields raw input paths.
pub trait PathSource {
    fn collect(&mut self) -> io::Result<Collected>;
}

/// Paths passed as process arguments.
#[derive(Debug, Clone, Default)]
pub struct ArgsSource {
    paths: Vec<OsString>,
}

impl ArgsSource {
    pub fn new<I>(paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl PathSource for ArgsSource {
    fn collect(&mut self) -> io::Result<Collected> {
        Ok(Collected::Paths(std::mem::take(&mut self.paths)))
    }
}

/// Source that is never available; used when there is no terminal to prompt on.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSource;

impl PathSource for NoSource {
    fn collect(&mut self) -> io::Result<Collected> {
        Ok(Collected::Unavailable)
    }
}

/// Interactive prompt: one path per line until a blank line or EOF.
pub struct PromptSource<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl PromptSource<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on the controlling terminal. Returns `None` when stdin is not a terminal.
    pub fn stdin() -> Option<Self> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return None;
        }
        Some(Self::new(stdin.lock(), io::stderr()))
    }
}

impl<R: BufRead, W: Write> PathSource for PromptSource<R, W> {
    fn collect(&mut self) -> io::Result<Collected> {
        writeln!(
            self.prompt_out,
            "Enter file paths to hash, one per line (blank line to finish):"
        )?;
        let mut paths = Vec::new();
        let mut line = String::new();
        loop {
            write!(self.prompt_out, "> ")?;
            self.prompt_out.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let entry = line.trim();
            if entry.is_empty() {
                break;
            }
            paths.push(OsString::from(entry));
        }
        tracing::debug!(count = paths.len(), "paths collected from prompt");
        Ok(Collected::Paths(paths))
    }
}
