//! Model layer
//!
//! Types describing what a values URL points at.

pub mod resource_kind;
pub mod value_url;

pub use resource_kind::ResourceKind;
pub use value_url::{DEFAULT_KEY, DEFAULT_NAMESPACE, ValueUrl};
