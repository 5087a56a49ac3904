use crate::digest::{Algorithm, DEFAULT_CHUNK_SIZE};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/sidehash/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidehashConfig {
    /// Digest algorithm; also the sidecar suffix ("md5", "sha256", "blake3").
    pub algorithm: Algorithm,
    /// Read granularity in bytes. Does not affect the digest.
    pub chunk_size: usize,
}

impl Default for SidehashConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SidehashConfig {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            bail!("chunk_size must be positive");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sidehash").context("locate config dir")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("create config dir")
}

/// Load configuration from disk, creating a default file if none exists.
///
/// Hashing does not need a config file: if its location cannot be created,
/// built-in defaults are used. An existing file that fails to parse is an error.
pub fn load_or_init() -> Result<SidehashConfig> {
    match config_path() {
        Ok(path) => load_or_init_at(&path),
        Err(e) => {
            tracing::warn!("using default config: {:#}", e);
            Ok(SidehashConfig::default())
        }
    }
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SidehashConfig> {
    if !path.exists() {
        let default_cfg = SidehashConfig::default();
        match write_default(path, &default_cfg) {
            Ok(()) => tracing::info!("created default config at {}", path.display()),
            Err(e) => tracing::warn!("using default config: {:#}", e),
        }
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SidehashConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &SidehashConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SidehashConfig::default();
        assert_eq!(cfg.algorithm, Algorithm::Md5);
        assert_eq!(cfg.chunk_size, 8192);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SidehashConfig {
            algorithm: Algorithm::Blake3,
            chunk_size: 65536,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SidehashConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: SidehashConfig = toml::from_str(r#"algorithm = "sha256""#).unwrap();
        assert_eq!(cfg.algorithm, Algorithm::Sha256);
        assert_eq!(cfg.chunk_size, 8192);
    }

    #[test]
    fn config_toml_unknown_algorithm_rejected() {
        assert!(toml::from_str::<SidehashConfig>(r#"algorithm = "crc32""#).is_err());
    }

    #[test]
    fn load_or_init_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, SidehashConfig::default());
        assert!(path.exists());
        assert_eq!(load_or_init_at(&path).unwrap(), cfg);
    }

    #[test]
    fn unwritable_config_location_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"").unwrap();
        let path = blocker.join("sidehash").join("config.toml");

        let cfg = load_or_init_at(&path).unwrap();
        assert_eq!(cfg, SidehashConfig::default());
        assert!(!path.exists());
        assert_eq!(std::fs::read(&blocker).unwrap(), b"");
    }

    #[test]
    fn write_default_error_names_the_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, b"").unwrap();
        let path = blocker.join("config.toml");

        let err = write_default(&path, &SidehashConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("create config dir"));
    }

    #[test]
    fn load_rejects_zero_chunk_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "chunk_size = 0\n").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("chunk_size must be positive"));
    }
}
