//! Identity service configuration.

use serde::{Deserialize, Serialize};

/// Default identity call timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Base URL of the identity service (e.g., `https://auth.example.com/api`).
    #[serde(default)]
    pub base_url: String,

    /// Timeout for the identity verification call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AuthConfig {
    /// Check if the identity service is reachable by configuration.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_not_configured() {
        let config = AuthConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn configured_when_base_url_set() {
        let config = AuthConfig {
            base_url: "https://auth.example.com/api".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}
