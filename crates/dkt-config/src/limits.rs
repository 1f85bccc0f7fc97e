//! Field bound configuration.

use dkt_core::limits::TaskLimits;
use serde::{Deserialize, Serialize};

const fn default_title_max() -> usize {
    TaskLimits::TITLE_MAX
}

const fn default_description_max() -> usize {
    TaskLimits::DESCRIPTION_MAX
}

const fn default_long_description_max() -> usize {
    TaskLimits::LONG_DESCRIPTION_MAX
}

/// Validator bounds, overridable per deployment. Note the schema carries
/// CHECK constraints at the stock bounds, so raising these past the stock
/// values also requires a schema change.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum title length in characters.
    #[serde(default = "default_title_max")]
    pub title_max: usize,

    /// Maximum description length in characters.
    #[serde(default = "default_description_max")]
    pub description_max: usize,

    /// Maximum long description length in characters.
    #[serde(default = "default_long_description_max")]
    pub long_description_max: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            title_max: default_title_max(),
            description_max: default_description_max(),
            long_description_max: default_long_description_max(),
        }
    }
}

impl LimitsConfig {
    /// The bounds as the validator consumes them.
    #[must_use]
    pub const fn to_limits(&self) -> TaskLimits {
        TaskLimits {
            title_max: self.title_max,
            description_max: self.description_max,
            long_description_max: self.long_description_max,
        }
    }
}
