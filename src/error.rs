//! Error types
//!
//! Every error is terminal for an invocation: the CLI prints it to stderr
//! and exits with status 1. Causes are kept as sources, so print with
//! `{:#}` through anyhow to get the whole chain.

use crate::models::ResourceKind;

/// Errors raised while resolving a values URL
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    MalformedUrl(String),

    #[error("unable to create Kubernetes client")]
    ClientInit(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to get {kind} {namespace}/{name}")]
    Fetch {
        kind: ResourceKind,
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn client_init<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::ClientInit(Box::new(err))
    }
}
