//! Service layer wrapping validation, storage, and response shaping.
//!
//! `TaskService` owns the database handle and the configured field bounds.
//! Every operation takes the authenticated caller's id, validates the
//! incoming payload against today's calendar date, runs the owner-scoped
//! store method, and shapes the result into the client-facing view with
//! `DD/MM/YYYY` dates. The repo methods are implemented as `impl TaskService`
//! blocks under [`crate::repos`].

use thiserror::Error;

use dkt_core::dates;
use dkt_core::errors::ValidationError;
use dkt_core::limits::TaskLimits;
use dkt_core::responses::{DeleteAck, TaskView};
use dkt_core::validate::{self, TaskPayload};

use crate::DocketDb;
use crate::error::StoreError;

/// Errors surfaced by service operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The payload failed validation; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No task matches the id or title within the caller's records.
    #[error("task not found")]
    NotFound,

    /// The store failed in a way the caller cannot correct.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for TaskError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

/// Task operations for authenticated callers.
pub struct TaskService {
    db: DocketDb,
    limits: TaskLimits,
}

impl TaskService {
    /// Open the database at `db_path` and build a service over it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open(db_path: &str, limits: TaskLimits) -> Result<Self, StoreError> {
        let db = DocketDb::open_local(db_path).await?;
        Ok(Self { db, limits })
    }

    /// Build a service over an already-open database.
    #[must_use]
    pub const fn from_db(db: DocketDb, limits: TaskLimits) -> Self {
        Self { db, limits }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &DocketDb {
        &self.db
    }

    /// The field bounds this service validates against.
    #[must_use]
    pub const fn limits(&self) -> TaskLimits {
        self.limits
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Every task owned by the caller, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Store` if the store query fails.
    pub async fn list_tasks(&self, owner_id: &str) -> Result<Vec<TaskView>, TaskError> {
        let tasks = self
            .tasks_for_owner(owner_id)
            .await
            .map_err(|e| fail(owner_id, "list", e))?;
        tracing::info!(user = owner_id, count = tasks.len(), "tasks listed");
        Ok(tasks.into_iter().map(TaskView::from).collect())
    }

    /// The caller's task with the given id.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::NotFound` if no owned task matches.
    pub async fn get_task(&self, owner_id: &str, id: &str) -> Result<TaskView, TaskError> {
        let task = self
            .task_by_id(owner_id, id)
            .await
            .map_err(|e| fail(owner_id, "get", e))?;
        Ok(TaskView::from(task))
    }

    /// The caller's task whose title matches, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::NotFound` if no owned title matches.
    pub async fn get_task_by_title(
        &self,
        owner_id: &str,
        title: &str,
    ) -> Result<TaskView, TaskError> {
        let task = self
            .task_by_title(owner_id, title)
            .await
            .map_err(|e| fail(owner_id, "get_by_title", e))?;
        Ok(TaskView::from(task))
    }

    /// Validate and persist a new task owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Validation` on a rejected payload (nothing is
    /// written) or `TaskError::Store` if the insert fails.
    pub async fn create_task(
        &self,
        owner_id: &str,
        payload: &TaskPayload,
    ) -> Result<TaskView, TaskError> {
        let new_task = validate::validate_create(payload, &self.limits, dates::today())
            .map_err(|e| reject(owner_id, "create", e))?;
        let task = self
            .insert_task(owner_id, &new_task)
            .await
            .map_err(|e| fail(owner_id, "create", e))?;
        tracing::info!(user = owner_id, task = %task.id, "task created");
        Ok(TaskView::from(task))
    }

    /// Validate and apply a partial update to the caller's task.
    ///
    /// Validation runs before the record is looked up, so a bad payload is
    /// rejected as such even when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Validation` on a rejected payload,
    /// `TaskError::NotFound` if no owned task matches, or `TaskError::Store`
    /// if the update fails.
    pub async fn update_task(
        &self,
        owner_id: &str,
        id: &str,
        payload: &TaskPayload,
    ) -> Result<TaskView, TaskError> {
        let changes = validate::validate_update(payload, &self.limits, dates::today())
            .map_err(|e| reject(owner_id, "update", e))?;
        let task = self
            .apply_update(owner_id, id, &changes)
            .await
            .map_err(|e| fail(owner_id, "update", e))?;
        tracing::info!(user = owner_id, task = %task.id, "task updated");
        Ok(TaskView::from(task))
    }

    /// Permanently delete the caller's task.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::NotFound` if no owned task matches.
    pub async fn delete_task(&self, owner_id: &str, id: &str) -> Result<DeleteAck, TaskError> {
        self.remove_task(owner_id, id)
            .await
            .map_err(|e| fail(owner_id, "delete", e))?;
        tracing::info!(user = owner_id, task = id, "task deleted");
        Ok(DeleteAck::new("task deleted"))
    }
}

fn reject(owner_id: &str, operation: &str, err: ValidationError) -> TaskError {
    tracing::warn!(user = owner_id, operation, error = %err, "payload rejected");
    TaskError::from(err)
}

fn fail(owner_id: &str, operation: &str, err: StoreError) -> TaskError {
    match err {
        StoreError::NotFound => {
            tracing::warn!(user = owner_id, operation, "task not found");
            TaskError::NotFound
        }
        other => {
            tracing::error!(user = owner_id, operation, error = %other, "store operation failed");
            TaskError::Store(other)
        }
    }
}
