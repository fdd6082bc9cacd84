//! Configuration loading and merging logic
//!
//! Precedence order (highest to lowest):
//! 1. Command-line overrides
//! 2. Config file (explicit path, else the default path if present)
//! 3. Built-in defaults

use std::path::Path;

use super::{paths, schema::Config};
use crate::error::{Error, Result};

/// Values given on the command line that win over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub context: Option<String>,
    pub debug: bool,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// An explicit `path` must exist. The default path is only read when a
    /// file is actually there.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Config> {
        let config = match path {
            Some(path) => Self::load_file(path)?,
            None => match paths::default_config_path() {
                Some(default_path) if default_path.exists() => Self::load_file(&default_path)?,
                _ => Config::default(),
            },
        };

        Ok(Self::apply_overrides(config, overrides))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    fn apply_overrides(mut config: Config, overrides: &Overrides) -> Config {
        if let Some(context) = &overrides.context {
            config.context = Some(context.clone());
        }
        // A flag can turn debug on but not off
        config.debug |= overrides.debug;
        config
    }
}
