//! Database configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "docket.db".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file (`":memory:"` for ephemeral use).
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
