//! Rate limiting configuration.

use serde::{Deserialize, Serialize};

/// Default window length: 15 minutes.
const fn default_window_secs() -> u64 {
    900
}

/// Default request budget per window.
const fn default_max_requests() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateConfig {
    /// Fixed window length in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Requests admitted per client per window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            max_requests: default_max_requests(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = RateConfig::default();
        assert_eq!(config.window_secs, 900);
        assert_eq!(config.max_requests, 100);
    }
}
