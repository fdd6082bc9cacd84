//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Kubeconfig context to use instead of the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Enable debug logging on stderr
    #[serde(default)]
    pub debug: bool,
}
