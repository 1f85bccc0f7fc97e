//! # dkt-config
//!
//! Layered configuration loading for Docket using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOCKET_*` prefix, `__` as separator)
//! 2. Project-level `.docket/config.toml`
//! 3. User-level `~/.config/docket/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOCKET_AUTH__BASE_URL` -> `auth.base_url`,
//! `DOCKET_LIMITS__DESCRIPTION_MAX` -> `limits.description_max`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use dkt_config::DocketConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = DocketConfig::load_with_dotenv().expect("config");
//!
//! if config.auth.is_configured() {
//!     println!("identity service: {}", config.auth.base_url);
//! }
//! ```

mod auth;
mod database;
mod error;
mod limits;
mod rate;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use limits::LimitsConfig;
pub use rate::RateConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocketConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub rate: RateConfig,
}

impl DocketConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the server
    /// binary.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".docket/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("DOCKET_").split("__"));

        figment
    }

    /// Reject configurations the server cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when no identity service base URL
    /// is set, or `ConfigError::InvalidValue` for an unusable rate budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.auth.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "auth".into(),
            });
        }
        if self.rate.max_requests == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rate.max_requests".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docket").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = DocketConfig::default();
        assert!(!config.auth.is_configured());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "docket.db");
        assert_eq!(config.rate.max_requests, 100);
    }

    #[test]
    fn validate_requires_identity_service() {
        let config = DocketConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));

        let config = DocketConfig {
            auth: AuthConfig {
                base_url: "https://auth.example.com/api".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn validate_rejects_zero_rate_budget() {
        let config = DocketConfig {
            auth: AuthConfig {
                base_url: "https://auth.example.com/api".into(),
                ..Default::default()
            },
            rate: RateConfig {
                max_requests: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
