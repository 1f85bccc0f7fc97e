use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// A personal work item owned by exactly one user.
///
/// `owner_id` is set from the authenticated caller at creation and never
/// changes; `id` and `created_at` are server-assigned. Text fields hold the
/// trimmed, escaped form produced by the validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}
