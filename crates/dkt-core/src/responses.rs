//! Client-facing representations.
//!
//! Stored tasks carry calendar dates and an instant; clients see every date
//! as a `DD/MM/YYYY` string. [`TaskView`] is that presentation shape, built
//! from a [`Task`] at the response boundary so the stored record stays typed.

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::entities::Task;
use crate::enums::TaskStatus;

/// A task as serialized in responses: camelCase keys, display-format dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub start_date: String,
    pub due_date: String,
    pub status: TaskStatus,
    pub created_at: String,
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            owner_id: task.owner_id,
            title: task.title,
            description: task.description,
            long_description: task.long_description,
            start_date: dates::format_display(task.start_date),
            due_date: dates::format_display(task.due_date),
            status: task.status,
            created_at: dates::format_display_instant(task.created_at),
        }
    }
}

/// Acknowledgement returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub status: String,
    pub message: String,
}

impl DeleteAck {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_owned(),
            message: message.into(),
        }
    }
}
