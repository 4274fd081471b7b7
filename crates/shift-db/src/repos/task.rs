//! Task repository.

use shift_core::entities::{NewTask, Task};
use shift_core::ids::PREFIX_TASK;
use shift_core::lifecycle::Visibility;
use shift_core::updates::TaskUpdate;

use crate::ShiftDb;
use crate::error::DatabaseError;
use crate::helpers::{get_flag, parse_datetime, parse_enum, visibility_clause};
use crate::store::TaskFilter;

const SELECT_COLS: &str = "id, account_id, schedule_id, start_time, duration, type, is_active";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        account_id: row.get(1)?,
        schedule_id: row.get(2)?,
        start_time: parse_datetime(&row.get::<String>(3)?)?,
        duration: row.get(4)?,
        kind: parse_enum(&row.get::<String>(5)?)?,
        active: get_flag(row, 6)?,
    })
}

impl ShiftDb {
    /// Fetch one task if `visibility` admits it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn get_task(
        &self,
        id: &str,
        visibility: Visibility,
    ) -> Result<Option<Task>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE id = ?1{}",
                    visibility_clause(visibility)
                ),
                [id],
            )
            .await?;
        rows.next().await?.map(|row| row_to_task(&row)).transpose()
    }

    /// List tasks in insertion order, optionally scoped to one schedule.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if filter.visibility == Visibility::ActiveOnly {
            conditions.push("is_active = 1".to_string());
        }
        if let Some(ref schedule_id) = filter.schedule_id {
            params.push(schedule_id.clone().into());
            conditions.push(format!("schedule_id = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks{where_clause} ORDER BY rowid"),
                libsql::params_from_iter(params),
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Store a new active task under a generated id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if id generation or the insert fails.
    pub async fn insert_task(&self, draft: NewTask) -> Result<Task, DatabaseError> {
        let id = self.generate_id(PREFIX_TASK).await?;

        self.conn()
            .execute(
                "INSERT INTO tasks (id, account_id, schedule_id, start_time, duration, type, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1)",
                libsql::params![
                    id.as_str(),
                    draft.account_id,
                    draft.schedule_id.as_str(),
                    draft.start_time.to_rfc3339(),
                    draft.duration,
                    draft.kind.as_str()
                ],
            )
            .await?;

        Ok(draft.into_task(id))
    }

    /// Write the `Some` fields of `patch` to the task if `visibility` admits
    /// it, returning the post-image. An empty patch reads instead.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails or violates a constraint.
    pub async fn update_task_fields(
        &self,
        id: &str,
        visibility: Visibility,
        patch: &TaskUpdate,
    ) -> Result<Option<Task>, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(account_id) = patch.account_id {
            sets.push(format!("account_id = ?{idx}"));
            params.push(account_id.into());
            idx += 1;
        }
        if let Some(ref schedule_id) = patch.schedule_id {
            sets.push(format!("schedule_id = ?{idx}"));
            params.push(schedule_id.clone().into());
            idx += 1;
        }
        if let Some(start_time) = patch.start_time {
            sets.push(format!("start_time = ?{idx}"));
            params.push(start_time.to_rfc3339().into());
            idx += 1;
        }
        if let Some(duration) = patch.duration {
            sets.push(format!("duration = ?{idx}"));
            params.push(duration.into());
            idx += 1;
        }
        if let Some(kind) = patch.kind {
            sets.push(format!("type = ?{idx}"));
            params.push(kind.as_str().into());
            idx += 1;
        }
        if let Some(active) = patch.active {
            sets.push(format!("is_active = ?{idx}"));
            params.push(i64::from(active).into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_task(id, visibility).await;
        }

        params.push(id.into());
        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ?{idx}{} RETURNING {SELECT_COLS}",
            sets.join(", "),
            visibility_clause(visibility)
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        rows.next().await?.map(|row| row_to_task(&row)).transpose()
    }
}
