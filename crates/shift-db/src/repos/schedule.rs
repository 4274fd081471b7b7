//! Schedule repository.

use shift_core::entities::{NewSchedule, Schedule};
use shift_core::ids::PREFIX_SCHEDULE;
use shift_core::lifecycle::Visibility;
use shift_core::updates::ScheduleUpdate;

use crate::ShiftDb;
use crate::error::DatabaseError;
use crate::helpers::{get_flag, parse_datetime, visibility_clause};
use crate::store::ScheduleFilter;

const SELECT_COLS: &str = "id, account_id, agent_id, start_time, end_time, is_active";

fn row_to_schedule(row: &libsql::Row) -> Result<Schedule, DatabaseError> {
    Ok(Schedule {
        id: row.get(0)?,
        account_id: row.get(1)?,
        agent_id: row.get(2)?,
        start_time: parse_datetime(&row.get::<String>(3)?)?,
        end_time: parse_datetime(&row.get::<String>(4)?)?,
        active: get_flag(row, 5)?,
    })
}

impl ShiftDb {
    /// Fetch one schedule if `visibility` admits it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn get_schedule(
        &self,
        id: &str,
        visibility: Visibility,
    ) -> Result<Option<Schedule>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM schedules WHERE id = ?1{}",
                    visibility_clause(visibility)
                ),
                [id],
            )
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_schedule(&row))
            .transpose()
    }

    /// List schedules in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_schedules(
        &self,
        filter: &ScheduleFilter,
    ) -> Result<Vec<Schedule>, DatabaseError> {
        let where_clause = match filter.visibility {
            Visibility::ActiveOnly => " WHERE is_active = 1",
            Visibility::Any => "",
        };
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM schedules{where_clause} ORDER BY rowid"),
                (),
            )
            .await?;

        let mut schedules = Vec::new();
        while let Some(row) = rows.next().await? {
            schedules.push(row_to_schedule(&row)?);
        }
        Ok(schedules)
    }

    /// Store a new active schedule under a generated id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if id generation or the insert fails.
    pub async fn insert_schedule(&self, draft: NewSchedule) -> Result<Schedule, DatabaseError> {
        let id = self.generate_id(PREFIX_SCHEDULE).await?;

        self.conn()
            .execute(
                "INSERT INTO schedules (id, account_id, agent_id, start_time, end_time, is_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, 1)",
                libsql::params![
                    id.as_str(),
                    draft.account_id,
                    draft.agent_id,
                    draft.start_time.to_rfc3339(),
                    draft.end_time.to_rfc3339()
                ],
            )
            .await?;

        Ok(draft.into_schedule(id))
    }

    /// Write the `Some` fields of `patch` to the schedule if `visibility`
    /// admits it, returning the post-image. An empty patch reads instead.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the write fails or violates a constraint.
    pub async fn update_schedule_fields(
        &self,
        id: &str,
        visibility: Visibility,
        patch: &ScheduleUpdate,
    ) -> Result<Option<Schedule>, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(account_id) = patch.account_id {
            sets.push(format!("account_id = ?{idx}"));
            params.push(account_id.into());
            idx += 1;
        }
        if let Some(agent_id) = patch.agent_id {
            sets.push(format!("agent_id = ?{idx}"));
            params.push(agent_id.into());
            idx += 1;
        }
        if let Some(start_time) = patch.start_time {
            sets.push(format!("start_time = ?{idx}"));
            params.push(start_time.to_rfc3339().into());
            idx += 1;
        }
        if let Some(end_time) = patch.end_time {
            sets.push(format!("end_time = ?{idx}"));
            params.push(end_time.to_rfc3339().into());
            idx += 1;
        }
        if let Some(active) = patch.active {
            sets.push(format!("is_active = ?{idx}"));
            params.push(i64::from(active).into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_schedule(id, visibility).await;
        }

        params.push(id.into());
        let sql = format!(
            "UPDATE schedules SET {} WHERE id = ?{idx}{} RETURNING {SELECT_COLS}",
            sets.join(", "),
            visibility_clause(visibility)
        );
        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        rows.next()
            .await?
            .map(|row| row_to_schedule(&row))
            .transpose()
    }
}
