//! Task payload validation.
//!
//! One pipeline, two entry points: [`validate_create`] requires the required
//! fields, [`validate_update`] checks only what the payload supplies. Both
//! trim and escape text on the accept path, so the values they hand to the
//! store are exactly what gets persisted.
//!
//! Violations are collected per field and reported together. The one
//! exception is the date-order rule: when both dates are supplied and
//! `startDate` lands after `dueDate`, the whole request is rejected with
//! [`ValidationError::DateOrder`] and field findings are discarded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::enums::TaskStatus;
use crate::errors::{ValidationError, Violation};
use crate::limits::TaskLimits;
use crate::sanitize;

// ---------------------------------------------------------------------------
// Payload and outputs
// ---------------------------------------------------------------------------

/// A candidate task as received from a client, before any checking.
///
/// Everything is optional at this stage; required-ness is a create-time rule.
/// There is deliberately no owner field: ownership comes from the
/// authenticated caller and can never be supplied by a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

/// A validated create payload: trimmed, escaped, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

/// A validated partial update: only supplied fields are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
}

impl TaskChanges {
    /// True when no field is set; callers treat this as a no-op update.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.long_description.is_none()
            && self.start_date.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate a payload for creation.
///
/// `today` is the reference calendar date for the today-or-later rule;
/// production callers pass [`dates::today`].
///
/// # Errors
///
/// Returns [`ValidationError::DateOrder`] when both dates parse and
/// `startDate` is after `dueDate`, otherwise [`ValidationError::Fields`]
/// with every violation found. Partial acceptance does not exist: any
/// violation rejects the whole payload.
pub fn validate_create(
    payload: &TaskPayload,
    limits: &TaskLimits,
    today: NaiveDate,
) -> Result<NewTask, ValidationError> {
    let mut violations = Vec::new();

    let title = require_text("title", payload.title.as_deref(), limits.title_max, &mut violations);
    let description = require_text(
        "description",
        payload.description.as_deref(),
        limits.description_max,
        &mut violations,
    );
    let long_description = match payload.long_description.as_deref() {
        Some(raw) => bounded_text(
            "longDescription",
            raw,
            limits.long_description_max,
            &mut violations,
        ),
        None => String::new(),
    };

    let start_date = match payload.start_date.as_deref() {
        Some(raw) => check_date("startDate", raw, today, &mut violations),
        None => {
            violations.push(required("startDate"));
            None
        }
    };
    let due_date = match payload.due_date.as_deref() {
        Some(raw) => check_date("dueDate", raw, today, &mut violations),
        None => {
            violations.push(required("dueDate"));
            None
        }
    };

    if let (Some(start), Some(due)) = (start_date, due_date) {
        if start > due {
            return Err(ValidationError::DateOrder);
        }
    }

    let status = match payload.status.as_deref() {
        Some(raw) => check_status(raw, &mut violations),
        None => TaskStatus::default(),
    };

    match (start_date, due_date) {
        (Some(start_date), Some(due_date)) if violations.is_empty() => Ok(NewTask {
            title,
            description,
            long_description,
            start_date,
            due_date,
            status,
        }),
        // A missing date always leaves a violation behind, so this arm never
        // sees an empty list.
        _ => Err(ValidationError::Fields(violations)),
    }
}

/// Validate a payload for a partial update: only supplied fields are checked.
///
/// # Errors
///
/// Same taxonomy as [`validate_create`]; the date-order rule applies only
/// when the update supplies both dates.
pub fn validate_update(
    payload: &TaskPayload,
    limits: &TaskLimits,
    today: NaiveDate,
) -> Result<TaskChanges, ValidationError> {
    let mut violations = Vec::new();

    let title = payload
        .title
        .as_deref()
        .map(|raw| updated_text("title", raw, limits.title_max, &mut violations));
    let description = payload
        .description
        .as_deref()
        .map(|raw| updated_text("description", raw, limits.description_max, &mut violations));
    let long_description = payload.long_description.as_deref().map(|raw| {
        bounded_text(
            "longDescription",
            raw,
            limits.long_description_max,
            &mut violations,
        )
    });

    let start_date = payload
        .start_date
        .as_deref()
        .and_then(|raw| check_date("startDate", raw, today, &mut violations));
    let due_date = payload
        .due_date
        .as_deref()
        .and_then(|raw| check_date("dueDate", raw, today, &mut violations));

    if let (Some(start), Some(due)) = (start_date, due_date) {
        if start > due {
            return Err(ValidationError::DateOrder);
        }
    }

    let status = payload
        .status
        .as_deref()
        .map(|raw| check_status(raw, &mut violations));

    if violations.is_empty() {
        Ok(TaskChanges {
            title,
            description,
            long_description,
            start_date,
            due_date,
            status,
        })
    } else {
        Err(ValidationError::Fields(violations))
    }
}

// ---------------------------------------------------------------------------
// Field checks
// ---------------------------------------------------------------------------

fn required(field: &'static str) -> Violation {
    Violation::new(field, format!("{field} is required"))
}

fn not_empty(field: &'static str) -> Violation {
    Violation::new(field, format!("{field} must not be empty"))
}

fn too_long(field: &'static str, max: usize) -> Violation {
    Violation::new(field, format!("{field} must not exceed {max} characters"))
}

fn bad_date(field: &'static str) -> Violation {
    Violation::new(field, format!("{field} must be a valid date"))
}

fn past_date(field: &'static str) -> Violation {
    Violation::new(field, format!("{field} must be today or later"))
}

fn bad_status() -> Violation {
    Violation::new(
        "status",
        "status must be one of 'Not Started', 'In Progress', 'Completed'",
    )
}

/// Clean a required text field. On a missing or blank field the returned
/// placeholder is never consumed: the recorded violation fails the payload.
fn require_text(
    field: &'static str,
    raw: Option<&str>,
    max: usize,
    violations: &mut Vec<Violation>,
) -> String {
    match raw {
        None => {
            violations.push(required(field));
            String::new()
        }
        Some(raw) => {
            let cleaned = sanitize::clean(raw);
            if cleaned.is_empty() {
                violations.push(required(field));
            } else if cleaned.chars().count() > max {
                violations.push(too_long(field, max));
            }
            cleaned
        }
    }
}

/// Clean a supplied text field on update: blank is rejected, bound enforced.
fn updated_text(
    field: &'static str,
    raw: &str,
    max: usize,
    violations: &mut Vec<Violation>,
) -> String {
    let cleaned = sanitize::clean(raw);
    if cleaned.is_empty() {
        violations.push(not_empty(field));
    } else if cleaned.chars().count() > max {
        violations.push(too_long(field, max));
    }
    cleaned
}

/// Clean an optional text field: empty is allowed, the bound is not.
fn bounded_text(
    field: &'static str,
    raw: &str,
    max: usize,
    violations: &mut Vec<Violation>,
) -> String {
    let cleaned = sanitize::clean(raw);
    if cleaned.chars().count() > max {
        violations.push(too_long(field, max));
    }
    cleaned
}

/// Parse a supplied date and apply the today-or-later rule. Returns the
/// parsed date even when it lies in the past, so the order check can still
/// run; unparseable input yields `None`.
fn check_date(
    field: &'static str,
    raw: &str,
    today: NaiveDate,
    violations: &mut Vec<Violation>,
) -> Option<NaiveDate> {
    match dates::to_calendar_date(raw) {
        Ok(date) => {
            if !dates::is_today_or_later(date, today) {
                violations.push(past_date(field));
            }
            Some(date)
        }
        Err(_) => {
            violations.push(bad_date(field));
            None
        }
    }
}

fn check_status(raw: &str, violations: &mut Vec<Violation>) -> TaskStatus {
    TaskStatus::parse(raw.trim()).unwrap_or_else(|| {
        violations.push(bad_status());
        TaskStatus::default()
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Fixed reference day for every test: 2026-08-25.
    fn today() -> NaiveDate {
        date(2026, 8, 25)
    }

    fn payload(title: &str, description: &str, start: &str, due: &str) -> TaskPayload {
        TaskPayload {
            title: Some(title.into()),
            description: Some(description.into()),
            start_date: Some(start.into()),
            due_date: Some(due.into()),
            ..TaskPayload::default()
        }
    }

    fn fields(result: Result<NewTask, ValidationError>) -> Vec<Violation> {
        match result {
            Err(ValidationError::Fields(violations)) => violations,
            other => panic!("expected field violations, got {other:?}"),
        }
    }

    // --- create ---

    #[test]
    fn create_accepts_minimal_payload_with_defaults() {
        let accepted = validate_create(
            &payload("Pay bills", "Monthly bills", "2026-08-25", "2026-09-01"),
            &TaskLimits::default(),
            today(),
        )
        .unwrap();

        assert_eq!(accepted.title, "Pay bills");
        assert_eq!(accepted.description, "Monthly bills");
        assert_eq!(accepted.long_description, "");
        assert_eq!(accepted.status, TaskStatus::NotStarted);
        assert_eq!(accepted.start_date, date(2026, 8, 25));
        assert_eq!(accepted.due_date, date(2026, 9, 1));
    }

    #[test]
    fn create_trims_and_escapes_text() {
        let mut p = payload(
            "  <b>Pay</b>  ",
            " bills & rent ",
            "2026-08-26",
            "2026-08-30",
        );
        p.long_description = Some("  a 'long' one  ".into());
        let accepted = validate_create(&p, &TaskLimits::default(), today()).unwrap();

        assert_eq!(accepted.title, "&lt;b&gt;Pay&lt;&#x2F;b&gt;");
        assert_eq!(accepted.description, "bills &amp; rent");
        assert_eq!(accepted.long_description, "a &#x27;long&#x27; one");
    }

    #[test]
    fn create_collects_all_violations_in_field_order() {
        let violations = fields(validate_create(
            &TaskPayload::default(),
            &TaskLimits::default(),
            today(),
        ));

        let named: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(named, vec!["title", "description", "startDate", "dueDate"]);
        assert_eq!(violations[0].message, "title is required");
    }

    #[test]
    fn create_blank_title_counts_as_missing() {
        let violations = fields(validate_create(
            &payload("   ", "desc", "2026-08-25", "2026-08-26"),
            &TaskLimits::default(),
            today(),
        ));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "title is required");
    }

    #[test]
    fn create_title_over_bound_cites_bound() {
        let violations = fields(validate_create(
            &payload(&"x".repeat(51), "desc", "2026-08-25", "2026-08-26"),
            &TaskLimits::default(),
            today(),
        ));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "title");
        assert_eq!(violations[0].message, "title must not exceed 50 characters");
    }

    #[test]
    fn create_description_of_201_chars_cites_200() {
        let violations = fields(validate_create(
            &payload("Title", &"d".repeat(201), "2026-08-25", "2026-08-26"),
            &TaskLimits::default(),
            today(),
        ));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "description must not exceed 200 characters"
        );
    }

    #[test]
    fn create_respects_configured_description_bound() {
        let narrow = TaskLimits {
            description_max: 75,
            ..TaskLimits::default()
        };
        let violations = fields(validate_create(
            &payload("Title", &"d".repeat(76), "2026-08-25", "2026-08-26"),
            &narrow,
            today(),
        ));
        assert_eq!(
            violations[0].message,
            "description must not exceed 75 characters"
        );

        // 75 characters exactly is fine.
        validate_create(
            &payload("Title", &"d".repeat(75), "2026-08-25", "2026-08-26"),
            &narrow,
            today(),
        )
        .unwrap();
    }

    #[test]
    fn create_escape_expansion_counts_toward_bound() {
        // 50 ampersands escape to 250 characters.
        let violations = fields(validate_create(
            &payload(&"&".repeat(50), "desc", "2026-08-25", "2026-08-26"),
            &TaskLimits::default(),
            today(),
        ));
        assert_eq!(violations[0].field, "title");
    }

    #[test]
    fn create_long_description_over_bound_rejected() {
        let mut p = payload("Title", "desc", "2026-08-25", "2026-08-26");
        p.long_description = Some("l".repeat(2001));
        let violations = fields(validate_create(&p, &TaskLimits::default(), today()));
        assert_eq!(violations[0].field, "longDescription");
        assert_eq!(
            violations[0].message,
            "longDescription must not exceed 2000 characters"
        );
    }

    #[test]
    fn create_rejects_past_dates_per_field() {
        let violations = fields(validate_create(
            &payload("Title", "desc", "2026-08-24", "2026-08-20"),
            &TaskLimits::default(),
            today(),
        ));
        let named: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(named, vec!["startDate", "dueDate"]);
        assert_eq!(violations[0].message, "startDate must be today or later");
    }

    #[test]
    fn create_accepts_today_exactly() {
        validate_create(
            &payload("Title", "desc", "2026-08-25", "2026-08-25"),
            &TaskLimits::default(),
            today(),
        )
        .unwrap();
    }

    #[test]
    fn create_time_of_day_does_not_move_the_boundary() {
        // Both timestamps fall on the reference day and must pass.
        validate_create(
            &payload(
                "Title",
                "desc",
                "2026-08-25T00:01:00Z",
                "2026-08-25T23:59:00Z",
            ),
            &TaskLimits::default(),
            today(),
        )
        .unwrap();
    }

    #[test]
    fn create_unparseable_date_is_field_scoped() {
        let violations = fields(validate_create(
            &payload("Title", "desc", "soon", "2026-08-26"),
            &TaskLimits::default(),
            today(),
        ));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "startDate");
        assert_eq!(violations[0].message, "startDate must be a valid date");
    }

    #[test]
    fn create_date_order_supersedes_field_checks() {
        // Both dates are also in the past; the order failure wins alone.
        let result = validate_create(
            &payload("Title", "desc", "2026-08-20", "2026-08-10"),
            &TaskLimits::default(),
            today(),
        );
        assert_eq!(result.unwrap_err(), ValidationError::DateOrder);
    }

    #[test]
    fn create_date_order_rejected_for_future_dates_too() {
        let result = validate_create(
            &payload("Title", "desc", "2026-09-10", "2026-09-01"),
            &TaskLimits::default(),
            today(),
        );
        assert_eq!(result.unwrap_err(), ValidationError::DateOrder);
    }

    #[test]
    fn create_rejects_unknown_status() {
        let mut p = payload("Title", "desc", "2026-08-25", "2026-08-26");
        p.status = Some("Done".into());
        let violations = fields(validate_create(&p, &TaskLimits::default(), today()));
        assert_eq!(violations[0].field, "status");
    }

    #[test]
    fn create_parses_supplied_status() {
        let mut p = payload("Title", "desc", "2026-08-25", "2026-08-26");
        p.status = Some("In Progress".into());
        let accepted = validate_create(&p, &TaskLimits::default(), today()).unwrap();
        assert_eq!(accepted.status, TaskStatus::InProgress);
    }

    #[test]
    fn payload_deserializes_camel_case() {
        let p: TaskPayload = serde_json::from_str(
            r#"{"title":"T","longDescription":"L","startDate":"2026-08-25","dueDate":"2026-08-26"}"#,
        )
        .unwrap();
        assert_eq!(p.title.as_deref(), Some("T"));
        assert_eq!(p.long_description.as_deref(), Some("L"));
        assert_eq!(p.start_date.as_deref(), Some("2026-08-25"));
    }

    #[test]
    fn payload_ignores_owner_like_fields() {
        // Unknown fields (including any owner id a client smuggles in) are
        // dropped on deserialization.
        let p: TaskPayload =
            serde_json::from_str(r#"{"title":"T","ownerId":"usr-evil","_id":"x"}"#).unwrap();
        assert_eq!(p.title.as_deref(), Some("T"));
        assert_eq!(p, TaskPayload {
            title: Some("T".into()),
            ..TaskPayload::default()
        });
    }

    // --- update ---

    #[test]
    fn update_empty_payload_yields_empty_changes() {
        let changes =
            validate_update(&TaskPayload::default(), &TaskLimits::default(), today()).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn update_sets_only_supplied_fields() {
        let p = TaskPayload {
            description: Some("new description".into()),
            status: Some("Completed".into()),
            ..TaskPayload::default()
        };
        let changes = validate_update(&p, &TaskLimits::default(), today()).unwrap();
        assert_eq!(changes.title, None);
        assert_eq!(changes.description.as_deref(), Some("new description"));
        assert_eq!(changes.status, Some(TaskStatus::Completed));
        assert_eq!(changes.start_date, None);
    }

    #[test]
    fn update_blank_title_rejected() {
        let p = TaskPayload {
            title: Some("   ".into()),
            ..TaskPayload::default()
        };
        let err = validate_update(&p, &TaskLimits::default(), today()).unwrap_err();
        match err {
            ValidationError::Fields(violations) => {
                assert_eq!(violations[0].message, "title must not be empty");
            }
            other => panic!("expected field violations, got {other:?}"),
        }
    }

    #[test]
    fn update_rechecks_supplied_dates() {
        let p = TaskPayload {
            start_date: Some("2026-08-24".into()),
            ..TaskPayload::default()
        };
        let err = validate_update(&p, &TaskLimits::default(), today()).unwrap_err();
        match err {
            ValidationError::Fields(violations) => {
                assert_eq!(violations[0].message, "startDate must be today or later");
            }
            other => panic!("expected field violations, got {other:?}"),
        }
    }

    #[test]
    fn update_date_order_applies_when_both_supplied() {
        let p = TaskPayload {
            start_date: Some("2026-09-10".into()),
            due_date: Some("2026-09-01".into()),
            ..TaskPayload::default()
        };
        let err = validate_update(&p, &TaskLimits::default(), today()).unwrap_err();
        assert_eq!(err, ValidationError::DateOrder);
    }

    #[test]
    fn update_single_date_skips_order_check() {
        let p = TaskPayload {
            start_date: Some("2026-09-10".into()),
            ..TaskPayload::default()
        };
        let changes = validate_update(&p, &TaskLimits::default(), today()).unwrap();
        assert_eq!(changes.start_date, Some(date(2026, 9, 10)));
        assert_eq!(changes.due_date, None);
    }

    #[test]
    fn update_long_description_may_be_cleared() {
        let p = TaskPayload {
            long_description: Some("  ".into()),
            ..TaskPayload::default()
        };
        let changes = validate_update(&p, &TaskLimits::default(), today()).unwrap();
        assert_eq!(changes.long_description.as_deref(), Some(""));
    }

    #[test]
    fn update_escapes_supplied_text() {
        let p = TaskPayload {
            title: Some("<i>Rent</i>".into()),
            ..TaskPayload::default()
        };
        let changes = validate_update(&p, &TaskLimits::default(), today()).unwrap();
        assert_eq!(changes.title.as_deref(), Some("&lt;i&gt;Rent&lt;&#x2F;i&gt;"));
    }

    #[test]
    fn update_rejects_unknown_status() {
        let p = TaskPayload {
            status: Some("Paused".into()),
            ..TaskPayload::default()
        };
        let err = validate_update(&p, &TaskLimits::default(), today()).unwrap_err();
        match err {
            ValidationError::Fields(violations) => {
                assert_eq!(violations[0].field, "status");
            }
            other => panic!("expected field violations, got {other:?}"),
        }
    }
}
