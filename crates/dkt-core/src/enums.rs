//! Task status enum.
//!
//! The wire strings are the spaced, title-case forms (`"Not Started"`), used
//! identically in JSON payloads and SQL storage. There is no state machine:
//! any status may be set at any time.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// Every accepted status, in display order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// Return the string representation used on the wire and in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parse the exact wire string back into a status.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        status_not_started,
        TaskStatus,
        TaskStatus::NotStarted,
        "Not Started"
    );
    test_serde_roundtrip!(
        status_in_progress,
        TaskStatus,
        TaskStatus::InProgress,
        "In Progress"
    );
    test_serde_roundtrip!(status_completed, TaskStatus, TaskStatus::Completed, "Completed");

    #[test]
    fn default_is_not_started() {
        assert_eq!(TaskStatus::default(), TaskStatus::NotStarted);
    }

    #[test]
    fn parse_accepts_exact_wire_strings() {
        assert_eq!(TaskStatus::parse("Not Started"), Some(TaskStatus::NotStarted));
        assert_eq!(TaskStatus::parse("In Progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse("Completed"), Some(TaskStatus::Completed));
    }

    #[test]
    fn parse_rejects_other_spellings() {
        assert_eq!(TaskStatus::parse("not started"), None);
        assert_eq!(TaskStatus::parse("NOT STARTED"), None);
        assert_eq!(TaskStatus::parse("NotStarted"), None);
        assert_eq!(TaskStatus::parse("Done"), None);
        assert_eq!(TaskStatus::parse(""), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", TaskStatus::NotStarted), "Not Started");
        assert_eq!(format!("{}", TaskStatus::InProgress), "In Progress");
        assert_eq!(format!("{}", TaskStatus::Completed), "Completed");
    }
}
