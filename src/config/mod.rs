//! Configuration system
//!
//! Layers built-in defaults, an optional YAML file and command-line
//! overrides into a single [`Config`].

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::{ConfigLoader, Overrides};
pub use schema::Config;
