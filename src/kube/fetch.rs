//! Resource fetching utilities
//!
//! Reads ConfigMaps and Secrets from the Kubernetes API and extracts a single
//! data key from them.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use kube::Api;

use crate::error::{Error, Result};
use crate::models::ResourceKind;

/// Read-only access to the resources a values URL can point at
///
/// Values are raw bytes so non-UTF-8 payloads reach Helm untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ValuesSource: Send + Sync {
    /// Fetch the data of a ConfigMap, `binaryData` included
    async fn get_config_map(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>>;

    /// Fetch the decoded data of a Secret
    async fn get_secret(&self, namespace: &str, name: &str) -> Result<BTreeMap<String, Vec<u8>>>;
}

/// [`ValuesSource`] backed by the Kubernetes API
pub struct KubeSource {
    client: kube::Client,
}

impl KubeSource {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ValuesSource for KubeSource {
    async fn get_config_map(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<BTreeMap<String, Vec<u8>>> {
        let api: Api<ConfigMap> = Api::namespaced(self.client.clone(), namespace);
        let cm = api
            .get(name)
            .await
            .map_err(|source| fetch_error(ResourceKind::ConfigMap, namespace, name, source))?;
        Ok(config_map_data(cm))
    }

    async fn get_secret(&self, namespace: &str, name: &str) -> Result<BTreeMap<String, Vec<u8>>> {
        let api: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = api
            .get(name)
            .await
            .map_err(|source| fetch_error(ResourceKind::Secret, namespace, name, source))?;
        Ok(secret_data(secret))
    }
}

fn fetch_error(kind: ResourceKind, namespace: &str, name: &str, source: kube::Error) -> Error {
    Error::Fetch {
        kind,
        namespace: namespace.to_string(),
        name: name.to_string(),
        source,
    }
}

/// Flatten a ConfigMap into key/value bytes
///
/// `data` wins over `binaryData` when a key appears in both.
pub fn config_map_data(cm: ConfigMap) -> BTreeMap<String, Vec<u8>> {
    let mut data: BTreeMap<String, Vec<u8>> = cm
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.into_bytes()))
        .collect();
    for (key, value) in cm.binary_data.unwrap_or_default() {
        data.entry(key).or_insert(value.0);
    }
    data
}

/// Take the decoded data of a Secret
pub fn secret_data(secret: Secret) -> BTreeMap<String, Vec<u8>> {
    secret
        .data
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.0))
        .collect()
}

/// Extract the value stored under `key` in a ConfigMap
///
/// A missing key yields an empty payload.
pub fn compose_values(data: &BTreeMap<String, Vec<u8>>, key: &str) -> Vec<u8> {
    compose(ResourceKind::ConfigMap, data, key)
}

/// Extract the value stored under `key` in a Secret
///
/// A missing key yields an empty payload.
pub fn compose_secret_values(data: &BTreeMap<String, Vec<u8>>, key: &str) -> Vec<u8> {
    compose(ResourceKind::Secret, data, key)
}

fn compose(kind: ResourceKind, data: &BTreeMap<String, Vec<u8>>, key: &str) -> Vec<u8> {
    match data.get(key) {
        Some(value) => value.clone(),
        None => {
            tracing::debug!("Key {} not found in {} data", key, kind);
            Vec::new()
        }
    }
}
