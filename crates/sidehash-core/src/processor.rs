//! Single-file processing: validate, digest, write sidecar.

use crate::digest::{compute_digest, Algorithm, DEFAULT_CHUNK_SIZE};
use crate::error::ProcessError;
use crate::input::normalize_path;
use crate::sidecar::{sidecar_path, write_sidecar};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Outcome of a successfully processed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub source: PathBuf,
    pub sidecar: PathBuf,
    pub digest: String,
}

impl ProcessedFile {
    /// File name of the source, for status lines.
    pub fn source_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    /// File name of the sidecar, for status lines.
    pub fn sidecar_name(&self) -> String {
        file_name_lossy(&self.sidecar)
    }
}

fn file_name_lossy(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| p.display().to_string())
}

/// Digest settings applied to every file of a run.
#[derive(Debug, Clone, Copy)]
pub struct Processor {
    algorithm: Algorithm,
    chunk_size: usize,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(Algorithm::default(), DEFAULT_CHUNK_SIZE)
    }
}

impl Processor {
    pub fn new(algorithm: Algorithm, chunk_size: usize) -> Self {
        Self {
            algorithm,
            chunk_size,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Digest one raw (possibly quoted) path and write its sidecar.
    pub fn process_file<P: AsRef<OsStr>>(&self, raw: P) -> Result<ProcessedFile, ProcessError> {
        let source = PathBuf::from(normalize_path(raw.as_ref()));

        // Follows symlinks: a link to a regular file is processed like the file.
        let meta = match std::fs::metadata(&source) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProcessError::NotFound { path: source });
            }
            Err(e) => return Err(ProcessError::from_io(&source, e)),
        };
        if !meta.is_file() {
            return Err(ProcessError::NotAFile { path: source });
        }

        let digest = compute_digest(&source, self.algorithm, self.chunk_size)
            .map_err(|e| ProcessError::from_io(&source, e))?;
        debug_assert_eq!(digest.len(), self.algorithm.hex_len());

        // Write failures name the sidecar, not the source that was read fine.
        let suffix = self.algorithm.suffix();
        let sidecar = write_sidecar(&source, suffix, &digest).map_err(|e| ProcessError::Io {
            path: sidecar_path(&source, suffix),
            source: e,
        })?;

        tracing::info!(
            source = %source.display(),
            sidecar = %sidecar.display(),
            algorithm = %self.algorithm,
            "sidecar written"
        );
        Ok(ProcessedFile {
            source,
            sidecar,
            digest,
        })
    }
}
