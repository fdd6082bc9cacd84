//! Values service
//!
//! Turns a parsed values URL into the payload Helm should receive. Exactly
//! one read is issued against the [`ValuesSource`] per call.

use crate::error::Result;
use crate::kube::{ValuesSource, compose_secret_values, compose_values};
use crate::models::{ResourceKind, ValueUrl};

/// Service resolving values URLs against a [`ValuesSource`]
pub struct ValuesService<S> {
    source: S,
}

impl<S: ValuesSource> ValuesService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolve a URL to its payload
    ///
    /// Returns `Ok(None)` when the protocol names no supported resource kind;
    /// nothing is read from the source in that case. Callers decide whether
    /// that is worth reporting.
    pub async fn resolve(&self, url: &ValueUrl) -> Result<Option<Vec<u8>>> {
        match url.kind() {
            Some(kind) => self
                .fetch(kind, &url.namespace, &url.name, &url.key)
                .await
                .map(Some),
            None => Ok(None),
        }
    }

    /// Read one resource and extract `key` from it
    pub async fn fetch(
        &self,
        kind: ResourceKind,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> Result<Vec<u8>> {
        tracing::debug!("Fetching {} {}/{} key {}", kind, namespace, name, key);

        let value = match kind {
            ResourceKind::ConfigMap => {
                let data = self.source.get_config_map(namespace, name).await?;
                compose_values(&data, key)
            }
            ResourceKind::Secret => {
                let data = self.source.get_secret(namespace, name).await?;
                compose_secret_values(&data, key)
            }
        };

        tracing::debug!(
            "Fetched {} bytes from {} {}/{}",
            value.len(),
            kind,
            namespace,
            name
        );
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::kube::fetch::MockValuesSource;
    use mockall::predicate::eq;
    use std::collections::BTreeMap;

    fn not_found(kind: ResourceKind, name: &str) -> Error {
        Error::Fetch {
            kind,
            namespace: "default".to_string(),
            name: name.to_string(),
            source: kube::Error::Service(format!("configmaps \"{}\" not found", name).into()),
        }
    }

    #[tokio::test]
    async fn test_resolve_config_map() {
        let mut source = MockValuesSource::new();
        source
            .expect_get_config_map()
            .with(eq("default"), eq("app"))
            .times(1)
            .returning(|_, _| {
                Ok(BTreeMap::from([(
                    "values.yaml".to_string(),
                    b"replica: 3".to_vec(),
                )]))
            });
        source.expect_get_secret().never();

        let service = ValuesService::new(source);
        let url = ValueUrl::parse("cm://app").unwrap();
        let value = service.resolve(&url).await.unwrap();
        assert_eq!(value.as_deref(), Some(&b"replica: 3"[..]));
    }

    #[tokio::test]
    async fn test_resolve_secret_with_key() {
        let mut source = MockValuesSource::new();
        source.expect_get_config_map().never();
        source
            .expect_get_secret()
            .with(eq("prod"), eq("dbcreds"))
            .times(1)
            .returning(|_, _| {
                Ok(BTreeMap::from([(
                    "db.yaml".to_string(),
                    b"user: admin".to_vec(),
                )]))
            });

        let service = ValuesService::new(source);
        let url = ValueUrl::parse("secret://prod/dbcreds/db.yaml").unwrap();
        let value = service.resolve(&url).await.unwrap();
        assert_eq!(value.as_deref(), Some(&b"user: admin"[..]));
    }

    #[tokio::test]
    async fn test_missing_key_is_empty() {
        let mut source = MockValuesSource::new();
        source
            .expect_get_config_map()
            .times(1)
            .returning(|_, _| Ok(BTreeMap::new()));

        let service = ValuesService::new(source);
        let url = ValueUrl::parse("cm://default/app/absent.yaml").unwrap();
        let value = service.resolve(&url).await.unwrap();
        assert_eq!(value, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let mut source = MockValuesSource::new();
        source
            .expect_get_config_map()
            .times(1)
            .returning(|_, name| Err(not_found(ResourceKind::ConfigMap, name)));

        let service = ValuesService::new(source);
        let url = ValueUrl::parse("cm://missing").unwrap();
        let err = service.resolve(&url).await.unwrap_err();
        assert!(matches!(err, Error::Fetch { kind: ResourceKind::ConfigMap, .. }));
        assert!(err.to_string().contains("default/missing"));
    }

    #[tokio::test]
    async fn test_unknown_protocol_is_ignored() {
        let mut source = MockValuesSource::new();
        source.expect_get_config_map().never();
        source.expect_get_secret().never();

        let service = ValuesService::new(source);
        let url = ValueUrl::parse("vault://app").unwrap();
        assert_eq!(service.resolve(&url).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_secret_bytes_pass_through() {
        let mut source = MockValuesSource::new();
        source
            .expect_get_secret()
            .times(1)
            .returning(|_, _| {
                Ok(BTreeMap::from([(
                    "values.yaml".to_string(),
                    b"a: \xff\xfe\n".to_vec(),
                )]))
            });

        let service = ValuesService::new(source);
        let value = service
            .fetch(ResourceKind::Secret, "default", "s", "values.yaml")
            .await
            .unwrap();
        assert_eq!(value, b"a: \xff\xfe\n");
    }
}
