//! Path Utilities
//!
//! Resolves the relay's per-user directory (~/.agent-relay/).

use std::path::PathBuf;

use crate::utils::error::{AppError, AppResult};

/// Get the user's home directory
pub fn home_dir() -> AppResult<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::config("Could not determine home directory"))
}

/// Get the Agent Relay directory (~/.agent-relay/)
pub fn relay_dir() -> AppResult<PathBuf> {
    Ok(home_dir()?.join(".agent-relay"))
}

/// Get the default config file path (~/.agent-relay/config.json)
pub fn config_path() -> AppResult<PathBuf> {
    Ok(relay_dir()?.join("config.json"))
}
