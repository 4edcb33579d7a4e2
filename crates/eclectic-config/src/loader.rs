//! Configuration loader with multi-source merging

use crate::{EclecticConfig, Paths};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "ECLECTIC".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "ECLECTIC")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/eclectic/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<EclecticConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = EclecticConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/eclectic/config.toml)
        if self.user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                if user_config_file.exists() {
                    tracing::debug!(path = %user_config_file.display(), "merging user config");
                    builder = builder.add_source(
                        config::File::from(user_config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // 3. Project config (eclectic.toml), then 4. local overrides
        for file in [
            Paths::project_config_file(&self.project_dir),
            Paths::local_config_file(&self.project_dir),
        ] {
            if file.exists() {
                tracing::debug!(path = %file.display(), "merging project config");
                builder = builder.add_source(
                    config::File::from(file)
                        .required(false)
                        .format(config::FileFormat::Toml),
                );
            }
        }

        // 5. Environment variables (ECLECTIC_CRC__ALGORITHM, ...)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let eclectic_config: EclecticConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        eclectic_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(eclectic_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
