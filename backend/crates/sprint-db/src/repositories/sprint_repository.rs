use crate::{DbError, Result as DbErrorResult, SprintStore};

use sprint_core::{Page, PageRequest, SortProperty, Sprint, SprintStatus};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SPRINT_COLUMNS: &str = "id, name, goal, start_date, end_date, status";

/// SQLite-backed sprint store
#[derive(Clone)]
pub struct SprintRepository {
    pool: SqlitePool,
}

impl SprintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert(&self, sprint: &Sprint) -> DbErrorResult<Sprint> {
        let start_date = sprint.start_date.map(|dt| dt.timestamp());
        let end_date = sprint.end_date.map(|dt| dt.timestamp());

        let row = sqlx::query(&format!(
            r#"
                INSERT INTO sprints (name, goal, start_date, end_date, status)
                VALUES (?, ?, ?, ?, ?)
                RETURNING {SPRINT_COLUMNS}
            "#
        ))
        .bind(&sprint.name)
        .bind(&sprint.goal)
        .bind(start_date)
        .bind(end_date)
        .bind(sprint.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Self::map_row(&row)
    }

    async fn upsert(&self, id: i64, sprint: &Sprint) -> DbErrorResult<Sprint> {
        let start_date = sprint.start_date.map(|dt| dt.timestamp());
        let end_date = sprint.end_date.map(|dt| dt.timestamp());

        let row = sqlx::query(&format!(
            r#"
                INSERT INTO sprints (id, name, goal, start_date, end_date, status)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    goal = excluded.goal,
                    start_date = excluded.start_date,
                    end_date = excluded.end_date,
                    status = excluded.status
                RETURNING {SPRINT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&sprint.name)
        .bind(&sprint.goal)
        .bind(start_date)
        .bind(end_date)
        .bind(sprint.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Self::map_row(&row)
    }

    /// Build the ORDER BY clause. `id` is always the final key so paging is
    /// stable when the requested properties tie.
    fn order_by(request: &PageRequest) -> String {
        let mut keys: Vec<String> = request
            .sort
            .iter()
            .map(|s| format!("{} {}", s.property.column(), s.direction.as_sql()))
            .collect();

        if !request.sort.iter().any(|s| s.property == SortProperty::Id) {
            keys.push("id ASC".to_string());
        }

        keys.join(", ")
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<Sprint> {
        let status: String = row.try_get("status")?;
        let start_date: Option<i64> = row.try_get("start_date")?;
        let end_date: Option<i64> = row.try_get("end_date")?;

        Ok(Sprint {
            id: Some(row.try_get("id")?),
            name: row.try_get("name")?,
            goal: row.try_get("goal")?,
            start_date: start_date
                .map(|ts| {
                    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
                        message: "Invalid timestamp in sprints.start_date".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })
                })
                .transpose()?,
            end_date: end_date
                .map(|ts| {
                    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
                        message: "Invalid timestamp in sprints.end_date".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    })
                })
                .transpose()?,
            status: SprintStatus::from_str(&status).map_err(|e| DbError::Initialization {
                message: format!("Invalid SprintStatus in sprints.status: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
        })
    }
}

#[async_trait]
impl SprintStore for SprintRepository {
    async fn save(&self, sprint: Sprint) -> DbErrorResult<Sprint> {
        match sprint.id {
            None => self.insert(&sprint).await,
            Some(id) => self.upsert(id, &sprint).await,
        }
    }

    async fn find_all(&self, request: &PageRequest) -> DbErrorResult<Page<Sprint>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sprints")
            .fetch_one(&self.pool)
            .await?;

        let limit = i64::try_from(request.limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(request.offset()).unwrap_or(i64::MAX);

        let rows = sqlx::query(&format!(
            "SELECT {SPRINT_COLUMNS} FROM sprints ORDER BY {} LIMIT ? OFFSET ?",
            Self::order_by(request)
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let content = rows
            .iter()
            .map(Self::map_row)
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(Page::new(
            content,
            request.page,
            request.size,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Sprint>> {
        let row = sqlx::query(&format!(
            "SELECT {SPRINT_COLUMNS} FROM sprints WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn delete_by_id(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM sprints WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> DbErrorResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
