//! Resource kind definitions
//!
//! Centralized enum for the Kubernetes objects a values URL can point at.
//! The URL protocol (`cm`, `secret`) is the only place these are spelled as
//! strings; everything downstream matches on the enum.

use std::fmt;
use std::str::FromStr;

/// Kubernetes resource kinds that can hold chart values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    ConfigMap,
    Secret,
}

impl ResourceKind {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::ConfigMap => "ConfigMap",
            ResourceKind::Secret => "Secret",
        }
    }

    /// URL protocol that selects this kind
    pub fn protocol(&self) -> &'static str {
        match self {
            ResourceKind::ConfigMap => "cm",
            ResourceKind::Secret => "secret",
        }
    }

    /// Try to parse a URL protocol, returning None if it names no known kind
    pub fn from_protocol(protocol: &str) -> Option<Self> {
        protocol.parse().ok()
    }

    /// Get all resource kinds
    pub fn all() -> &'static [Self] {
        &[ResourceKind::ConfigMap, ResourceKind::Secret]
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(ResourceKind::ConfigMap),
            "secret" => Ok(ResourceKind::Secret),
            _ => Err(format!("Unknown protocol: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_protocol() {
        assert_eq!(
            ResourceKind::from_protocol("cm"),
            Some(ResourceKind::ConfigMap)
        );
        assert_eq!(
            ResourceKind::from_protocol("secret"),
            Some(ResourceKind::Secret)
        );
        assert_eq!(ResourceKind::from_protocol("configmap"), None);
        // Protocols are matched exactly, like the URL scheme Helm hands us
        assert_eq!(ResourceKind::from_protocol("CM"), None);
    }

    #[test]
    fn test_protocol_round_trip() {
        for kind in ResourceKind::all() {
            assert_eq!(ResourceKind::from_protocol(kind.protocol()), Some(*kind));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ResourceKind::ConfigMap), "ConfigMap");
        assert_eq!(format!("{}", ResourceKind::Secret), "Secret");
    }
}
