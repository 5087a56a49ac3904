//! Per-file failure taxonomy reported by the processor.

use std::io;
use std::path::{Path, PathBuf};

/// Why a single input could not be turned into a sidecar. The batch reports it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("file does not exist - {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("not a regular file - {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("permission denied - {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other read or write failure; `path` is the file being read or the sidecar being written.
    #[error("I/O error on {} - {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    /// Classify an I/O error raised while reading the input.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ProcessError::NotFound { path },
            io::ErrorKind::PermissionDenied => ProcessError::PermissionDenied { path },
            _ => ProcessError::Io { path, source: err },
        }
    }

    /// The offending input path.
    pub fn path(&self) -> &Path {
        match self {
            ProcessError::NotFound { path }
            | ProcessError::NotAFile { path }
            | ProcessError::PermissionDenied { path }
            | ProcessError::Io { path, .. } => path,
        }
    }
}
