//! Centralized length bounds for task text fields.
//!
//! The canonical values live here as named constants; deployments may narrow
//! the description bound through configuration. Lengths are measured in
//! characters on the trimmed, escaped value, so what passes validation is
//! exactly what fits in storage.

use serde::{Deserialize, Serialize};

/// Maximum lengths (in characters) for task text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLimits {
    pub title_max: usize,
    pub description_max: usize,
    pub long_description_max: usize,
}

impl TaskLimits {
    /// Canonical title bound.
    pub const TITLE_MAX: usize = 50;
    /// Canonical description bound.
    pub const DESCRIPTION_MAX: usize = 200;
    /// Canonical long-description bound.
    pub const LONG_DESCRIPTION_MAX: usize = 2000;
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            title_max: Self::TITLE_MAX,
            description_max: Self::DESCRIPTION_MAX,
            long_description_max: Self::LONG_DESCRIPTION_MAX,
        }
    }
}
