//! JSON Configuration Management
//!
//! Handles reading the relay configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::utils::error::{AppError, AppResult};
use crate::utils::paths::config_path;

/// Configuration service for relay settings
#[derive(Debug, Default)]
pub struct ConfigService {
    /// File the config was loaded from, if any
    source: Option<PathBuf>,
    config: AppConfig,
}

impl ConfigService {
    /// Load and validate a config file. The file must exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        let config = Self::load_from_file(path)?;
        tracing::info!(path = %path.display(), "Loaded relay configuration");
        Ok(Self {
            source: Some(path.to_path_buf()),
            config,
        })
    }

    /// Load an explicit path, else the default path when it exists, else
    /// built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match config_path() {
            Ok(default_path) if default_path.exists() => Self::load(&default_path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_from_file(path: &Path) -> AppResult<AppConfig> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate().map_err(AppError::validation)?;
        Ok(config)
    }

    /// Apply a partial update and re-validate. Nothing is written back.
    pub fn apply_update(&mut self, update: SettingsUpdate) -> AppResult<&AppConfig> {
        let mut updated = self.config.clone();
        updated.apply_update(update);
        updated.validate().map_err(AppError::validation)?;
        self.config = updated;
        Ok(&self.config)
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
