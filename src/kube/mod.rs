//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server. Authentication is left
//! entirely to kube-rs and the kubeconfig it discovers.

pub mod fetch;

pub use fetch::{KubeSource, ValuesSource, compose_secret_values, compose_values};

use crate::error::{Error, Result};
use kube::config::KubeConfigOptions;
use kube::{Client, Config};

/// Initialize and return a Kubernetes client
///
/// Without a context, uses the default kubeconfig loading strategy:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
///
/// With a context, the kubeconfig is loaded with that context selected.
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = match context {
        Some(name) => {
            tracing::debug!("Loading kubeconfig with context {}", name);
            let options = KubeConfigOptions {
                context: Some(name.to_string()),
                ..Default::default()
            };
            Config::from_kubeconfig(&options)
                .await
                .map_err(Error::client_init)?
        }
        None => Config::infer().await.map_err(Error::client_init)?,
    };

    tracing::debug!("Using Kubernetes API server {}", config.cluster_url);
    Client::try_from(config).map_err(Error::client_init)
}
