//! Task repository: owner-scoped CRUD on the tasks table.
//!
//! Every read goes through [`select_owned`] and every write carries an
//! explicit `id = ? AND owner_id = ?` predicate, so a caller can only ever
//! touch their own records. A wrong id and a right id owned by someone else
//! are indistinguishable: both are [`StoreError::NotFound`].

use chrono::Utc;

use dkt_core::entities::Task;
use dkt_core::validate::{NewTask, TaskChanges};

use crate::error::StoreError;
use crate::helpers::{parse_date, parse_enum, parse_timestamp};
use crate::service::TaskService;

pub(crate) const TASK_PREFIX: &str = "tsk";

const SELECT_COLS: &str =
    "id, owner_id, title, description, long_description, start_date, due_date, status, created_at";

/// Owner-scoped SELECT; `extra` is appended after the owner predicate.
fn select_owned(extra: &str) -> String {
    format!("SELECT {SELECT_COLS} FROM tasks WHERE owner_id = ?1{extra}")
}

fn row_to_task(row: &libsql::Row) -> Result<Task, StoreError> {
    Ok(Task {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        long_description: row.get(4)?,
        start_date: parse_date(&row.get::<String>(5)?)?,
        due_date: parse_date(&row.get::<String>(6)?)?,
        status: parse_enum(&row.get::<String>(7)?)?,
        created_at: parse_timestamp(&row.get::<String>(8)?)?,
    })
}

impl TaskService {
    /// Insert a validated task for `owner_id` and return the stored record.
    ///
    /// The owner always comes from the authenticated caller; a payload has
    /// no way to carry one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if id generation or the insert fails (including
    /// schema constraint violations).
    pub async fn insert_task(
        &self,
        owner_id: &str,
        new_task: &NewTask,
    ) -> Result<Task, StoreError> {
        let now = Utc::now();
        let id = self.db().generate_id(TASK_PREFIX).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"
                ),
                libsql::params![
                    id.as_str(),
                    owner_id,
                    new_task.title.as_str(),
                    new_task.description.as_str(),
                    new_task.long_description.as_str(),
                    new_task.start_date.to_string(),
                    new_task.due_date.to_string(),
                    new_task.status.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Task {
            id,
            owner_id: owner_id.to_owned(),
            title: new_task.title.clone(),
            description: new_task.description.clone(),
            long_description: new_task.long_description.clone(),
            start_date: new_task.start_date,
            due_date: new_task.due_date,
            status: new_task.status,
            created_at: now,
        })
    }

    /// All tasks owned by `owner_id`, in creation order (id as tie-break).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn tasks_for_owner(&self, owner_id: &str) -> Result<Vec<Task>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(&select_owned(" ORDER BY created_at, id"), [owner_id])
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// The owned task with the given id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record matches both id and owner.
    pub async fn task_by_id(&self, owner_id: &str, id: &str) -> Result<Task, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(&select_owned(" AND id = ?2"), [owner_id, id])
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NotFound)?;
        row_to_task(&row)
    }

    /// The owned task whose title matches `title`, case-insensitively and as
    /// a whole string. When several case variants match, the oldest wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no owned title matches.
    pub async fn task_by_title(&self, owner_id: &str, title: &str) -> Result<Task, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &select_owned(" AND lower(title) = lower(?2) ORDER BY created_at, id LIMIT 1"),
                [owner_id, title],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NotFound)?;
        row_to_task(&row)
    }

    /// Merge the supplied fields into the owned record and return it.
    ///
    /// Unset fields are left untouched. An empty change set is a no-op that
    /// returns the current record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record matches both id and owner.
    pub async fn apply_update(
        &self,
        owner_id: &str,
        id: &str,
        changes: &TaskChanges,
    ) -> Result<Task, StoreError> {
        if changes.is_empty() {
            return self.task_by_id(owner_id, id).await;
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = changes.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref description) = changes.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().into());
            idx += 1;
        }
        if let Some(ref long_description) = changes.long_description {
            sets.push(format!("long_description = ?{idx}"));
            params.push(long_description.clone().into());
            idx += 1;
        }
        if let Some(start_date) = changes.start_date {
            sets.push(format!("start_date = ?{idx}"));
            params.push(start_date.to_string().into());
            idx += 1;
        }
        if let Some(due_date) = changes.due_date {
            sets.push(format!("due_date = ?{idx}"));
            params.push(due_date.to_string().into());
            idx += 1;
        }
        if let Some(status) = changes.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }

        let id_idx = idx;
        params.push(id.into());
        idx += 1;
        params.push(owner_id.into());
        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ?{id_idx} AND owner_id = ?{idx}",
            sets.join(", ")
        );
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }

        self.task_by_id(owner_id, id).await
    }

    /// Permanently remove the owned record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record matches both id and owner.
    pub async fn remove_task(&self, owner_id: &str, id: &str) -> Result<(), StoreError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM tasks WHERE id = ?1 AND owner_id = ?2",
                [id, owner_id],
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
