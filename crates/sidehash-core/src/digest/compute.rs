//! Chunked digest of a file or reader.
//!
//! Reads in fixed-size chunks to keep memory use bounded; the chunk size only
//! affects read granularity, never the result.

use super::Algorithm;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read granularity used when neither config nor CLI overrides it.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Compute the digest of a file and return it as lowercase hex.
///
/// Any open or read failure is returned as-is; a partial digest is never produced.
pub fn compute_digest(path: &Path, algorithm: Algorithm, chunk_size: usize) -> io::Result<String> {
    let f = File::open(path)?;
    let digest = digest_reader(f, algorithm, chunk_size)?;
    tracing::debug!(path = %path.display(), %algorithm, chunk_size, "digest computed");
    Ok(digest)
}

/// Feed a reader through a fresh accumulator until EOF.
pub fn digest_reader<R: Read>(
    mut reader: R,
    algorithm: Algorithm,
    chunk_size: usize,
) -> io::Result<String> {
    if chunk_size == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "chunk size must be positive",
        ));
    }
    let mut acc = algorithm.accumulator();
    let mut buf = vec![0u8; chunk_size];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        acc.update(&buf[..n]);
    }
    Ok(acc.finalize())
}
