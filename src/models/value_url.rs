//! Values URL parsing
//!
//! Helm hands a downloader plugin the full URL of the values file it wants.
//! The URL is formatted like:
//!
//! ```text
//! <protocol>://[<namespace>/]<name>[/<key>]
//! ```
//!
//! `namespace` falls back to `default` and `key` to `values.yaml`.

use std::fmt;
use std::str::FromStr;

use super::ResourceKind;
use crate::error::{Error, Result};

/// Namespace used when the URL names only the resource
pub const DEFAULT_NAMESPACE: &str = "default";

/// Data key used when the URL does not name one
pub const DEFAULT_KEY: &str = "values.yaml";

const PROTOCOL_SEPARATOR: &str = "://";

/// A parsed values URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueUrl {
    pub protocol: String,
    pub namespace: String,
    pub name: String,
    pub key: String,
}

impl ValueUrl {
    /// Parse a values URL
    ///
    /// Any protocol is accepted here; use [`ValueUrl::kind`] to find out
    /// whether it names a resource we know how to read. Path segments past
    /// the key are ignored.
    pub fn parse(url: &str) -> Result<Self> {
        let (protocol, path) = url
            .split_once(PROTOCOL_SEPARATOR)
            .ok_or_else(|| Error::MalformedUrl(":// missing after protocol".to_string()))?;

        let segments: Vec<&str> = path.split('/').collect();
        let (namespace, name, key) = match segments.as_slice() {
            [] | ["", ..] => return Err(missing_name()),
            [name] => (DEFAULT_NAMESPACE, *name, DEFAULT_KEY),
            [namespace, name] => (*namespace, *name, DEFAULT_KEY),
            [namespace, name, key, ..] => (*namespace, *name, *key),
        };
        // `ns/` leaves the name empty just like a bare `cm://`
        if name.is_empty() {
            return Err(missing_name());
        }

        Ok(Self {
            protocol: protocol.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
            key: key.to_string(),
        })
    }

    /// Resource kind selected by the protocol, if it is one we support
    pub fn kind(&self) -> Option<ResourceKind> {
        ResourceKind::from_protocol(&self.protocol)
    }
}

fn missing_name() -> Error {
    Error::MalformedUrl("no config provided after protocol".to_string())
}

impl FromStr for ValueUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ValueUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}/{}/{}",
            self.protocol, PROTOCOL_SEPARATOR, self.namespace, self.name, self.key
        )
    }
}
