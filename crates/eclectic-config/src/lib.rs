//! Configuration management for the eclectic CRC tools
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (ECLECTIC_* prefix, `__` between sections)
//! 3. eclectic.local.toml (gitignored, local overrides)
//! 4. eclectic.toml (project config)
//! 5. ~/.config/eclectic/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use eclectic_crc::AnyAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Largest accepted `crc.chunk_size`; one buffer of this size is allocated
/// per checksum run.
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Main eclectic configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EclecticConfig {
    pub crc: CrcConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrcConfig {
    /// Catalog name of the default variant
    pub algorithm: String,
    /// Table-driven (true) or bit-serial (false) calculation
    pub lookup_table: bool,
    /// Bytes read per streaming step
    pub chunk_size: usize,
}

impl Default for CrcConfig {
    fn default() -> Self {
        Self {
            algorithm: "CRC-32".to_string(),
            lookup_table: true,
            chunk_size: 64 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub uppercase: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Hex,
            uppercase: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Hex,
    Decimal,
}

impl EclecticConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load a single TOML file, without merging other sources
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configured default algorithm against the catalog
    pub fn algorithm(&self) -> Result<AnyAlgorithm, ConfigError> {
        self.crc.algorithm.parse().map_err(|e| {
            ConfigError::ValidationError(format!("crc.algorithm: {e}"))
        })
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.algorithm()?;

        if self.crc.chunk_size == 0 {
            return Err(ConfigError::ValidationError(
                "crc.chunk_size must be greater than zero".to_string(),
            ));
        }

        if self.crc.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::ValidationError(format!(
                "crc.chunk_size {} exceeds the maximum of {MAX_CHUNK_SIZE} bytes",
                self.crc.chunk_size
            )));
        }

        Ok(())
    }
}
