//! Validation error types shared across Docket crates.
//!
//! Storage and HTTP errors are defined in their own crates; this module holds
//! only what the validator reports. A payload fails either with a list of
//! field-scoped violations or with the request-scoped date-order error,
//! never both.

use serde::Serialize;
use thiserror::Error;

/// A date-like input that does not name a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date: '{input}'")]
pub struct InvalidDate {
    pub input: String,
}

/// A single field-scoped validation failure.
///
/// `field` carries the wire-format name (`"title"`, `"startDate"`, ...) so
/// the error body can be consumed without translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of validating a task payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more field-scoped violations, reported together in field order.
    #[error("{} field violation(s)", .0.len())]
    Fields(Vec<Violation>),

    /// `startDate` is after `dueDate`. Request-scoped: blocks the whole
    /// operation and supersedes any field-level date findings.
    #[error("startDate must not be after dueDate")]
    DateOrder,
}
