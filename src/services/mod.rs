//! Service layer
//!
//! Sits between the CLI and the Kubernetes API: the CLI hands over a parsed
//! URL and gets back the payload to print.

pub mod values_service;

pub use values_service::ValuesService;
