//! Configuration path resolution
//!
//! Uses the platform configuration directory:
//! - Linux: ~/.config/helm-external-val
//! - macOS: ~/Library/Application Support/helm-external-val
//! - Windows: %APPDATA%\helm-external-val\config

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "helm-external-val";

/// Get the configuration directory path, if a home directory is known
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the default configuration file path
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}
