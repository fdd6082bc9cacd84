//! helm-external-val library
//!
//! Resolves `cm://` and `secret://` URLs into chart values stored in
//! Kubernetes ConfigMaps and Secrets. The binary is a thin wrapper around
//! [`cli`]; everything else can be used directly for testing.

pub mod cli;
pub mod config;
pub mod error;
pub mod kube;
pub mod models;
pub mod services;

pub use error::{Error, Result};
pub use crate::kube::{KubeSource, ValuesSource};
pub use models::{ResourceKind, ValueUrl};
pub use services::ValuesService;
