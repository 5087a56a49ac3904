//! Sidecar files: `<file>.<suffix>` next to the source, holding only the hex digest.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path for the sidecar: appends `.<suffix>` to the source path (e.g. `file.iso` -> `file.iso.md5`).
pub fn sidecar_path(source: &Path, suffix: &str) -> PathBuf {
    let mut o = source.as_os_str().to_owned();
    o.push(".");
    o.push(suffix);
    PathBuf::from(o)
}

/// Write the digest as the sidecar's entire contents, replacing any existing sidecar.
pub fn write_sidecar(source: &Path, suffix: &str, digest: &str) -> io::Result<PathBuf> {
    let path = sidecar_path(source, suffix);
    fs::write(&path, digest)?;
    Ok(path)
}
