//! Streaming digests: the accumulator seam and the supported algorithms.
//!
//! File handling only ever talks to [`HashAccumulator`], so adding or
//! swapping an algorithm does not touch the chunked read loop in
//! [`compute`].

mod compute;

pub use compute::{compute_digest, digest_reader, DEFAULT_CHUNK_SIZE};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Incremental hash state. Chunks must be fed in stream order.
///
/// `finalize` consumes the accumulator, so it cannot be updated afterwards.
pub trait HashAccumulator {
    fn update(&mut self, bytes: &[u8]);
    fn finalize(self: Box<Self>) -> String;
}

/// Digest algorithm used for a run. The sidecar suffix is the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Md5,
    Sha256,
    Blake3,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Md5, Algorithm::Sha256, Algorithm::Blake3];

    /// Name as used in config, on the command line, and as the sidecar suffix.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha256 => "sha256",
            Algorithm::Blake3 => "blake3",
        }
    }

    /// Sidecar extension without the leading dot (e.g. `md5` for `file.iso.md5`).
    pub fn suffix(self) -> &'static str {
        self.name()
    }

    /// Length of the rendered hex digest.
    pub fn hex_len(self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha256 | Algorithm::Blake3 => 64,
        }
    }

    /// Fresh accumulator for one file.
    pub fn accumulator(self) -> Box<dyn HashAccumulator> {
        match self {
            Algorithm::Md5 => Box::new(RustCrypto(md5::Md5::default())),
            Algorithm::Sha256 => Box::new(RustCrypto(sha2::Sha256::default())),
            Algorithm::Blake3 => Box::new(Blake3(blake3::Hasher::new())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an algorithm name that is not supported.
#[derive(Debug, thiserror::Error)]
#[error("unknown digest algorithm `{0}` (expected one of: md5, sha256, blake3)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Adapter for RustCrypto hashers (MD5, SHA-256).
struct RustCrypto<D>(D);

impl<D: sha2::Digest> HashAccumulator for RustCrypto<D> {
    fn update(&mut self, bytes: &[u8]) {
        sha2::Digest::update(&mut self.0, bytes);
    }

    fn finalize(self: Box<Self>) -> String {
        let RustCrypto(inner) = *self;
        hex::encode(inner.finalize())
    }
}

struct Blake3(blake3::Hasher);

impl HashAccumulator for Blake3 {
    fn update(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    fn finalize(self: Box<Self>) -> String {
        self.0.finalize().to_hex().to_string()
    }
}
