use crate::repositories::row::{RowReader, encode_list, millis};
use crate::Result as DbErrorResult;

use hub_core::{ColumnEntry, Task, TaskPriority};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use uuid::Uuid;

const TASK_COLUMNS: &str = r#"
    id, project_id, title, description, status, priority, assignee_id,
    due_date, tags, order_index, version,
    created_at, updated_at, created_by, updated_by, deleted_at
"#;

/// Listing filter. Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub project_id: Option<Uuid>,
    pub status: Option<String>,
    pub assignee_id: Option<Uuid>,
    pub priority: Option<TaskPriority>,
    /// Only tasks due at or before this instant
    pub due_before: Option<DateTime<Utc>>,
    pub include_deleted: bool,
}

pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO hub_tasks (
                    id, project_id, title, description, status, priority, assignee_id,
                    due_date, tags, order_index, version,
                    created_at, updated_at, created_by, updated_by, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.project_id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.status)
        .bind(task.priority.as_str())
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(task.due_date.map(millis))
        .bind(encode_list("tags", &task.tags)?)
        .bind(task.order_index)
        .bind(task.version)
        .bind(millis(task.created_at))
        .bind(millis(task.updated_at))
        .bind(task.created_by.to_string())
        .bind(task.updated_by.to_string())
        .bind(task.deleted_at.map(millis))
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Look up a task by id, soft-deleted or not.
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {TASK_COLUMNS} FROM hub_tasks WHERE id = ?");

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(map_task).transpose()
    }

    /// Tasks matching `filter`, in board order: order index, then creation time.
    pub async fn list<'e, E>(executor: E, filter: &TaskFilter) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {TASK_COLUMNS} FROM hub_tasks WHERE 1 = 1"));

        if !filter.include_deleted {
            query.push(" AND deleted_at IS NULL");
        }
        if let Some(project_id) = filter.project_id {
            query.push(" AND project_id = ").push_bind(project_id.to_string());
        }
        if let Some(status) = &filter.status {
            query.push(" AND status = ").push_bind(status.clone());
        }
        if let Some(assignee_id) = filter.assignee_id {
            query.push(" AND assignee_id = ").push_bind(assignee_id.to_string());
        }
        if let Some(priority) = filter.priority {
            query.push(" AND priority = ").push_bind(priority.as_str());
        }
        if let Some(due_before) = filter.due_before {
            query
                .push(" AND due_date IS NOT NULL AND due_date <= ")
                .push_bind(millis(due_before));
        }
        query.push(" ORDER BY order_index ASC, created_at ASC, rowid ASC");

        let rows = query.build().fetch_all(executor).await?;

        rows.iter().map(map_task).collect()
    }

    /// Live tasks of one kanban column, in board order.
    pub async fn find_column<'e, E>(
        executor: E,
        project_id: Uuid,
        status: &str,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            "SELECT {TASK_COLUMNS} FROM hub_tasks
             WHERE project_id = ? AND status = ? AND deleted_at IS NULL
             ORDER BY order_index ASC, created_at ASC, rowid ASC"
        );

        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .bind(status)
            .fetch_all(executor)
            .await?;

        rows.iter().map(map_task).collect()
    }

    /// Ordering view of one column, for drop planning.
    pub async fn find_column_entries<'e, E>(
        executor: E,
        project_id: Uuid,
        status: &str,
    ) -> DbErrorResult<Vec<ColumnEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, order_index, created_at
                FROM hub_tasks
                WHERE project_id = ? AND status = ? AND deleted_at IS NULL
                ORDER BY order_index ASC, created_at ASC, rowid ASC
            "#,
        )
        .bind(project_id.to_string())
        .bind(status)
        .fetch_all(executor)
        .await?;

        rows.iter()
            .map(|row| {
                let r = RowReader::new(row, "hub_tasks");
                Ok(ColumnEntry {
                    id: r.uuid("id")?,
                    order_index: r.int("order_index")?,
                    created_at: r.timestamp("created_at")?,
                })
            })
            .collect()
    }

    /// Highest order index among the live tasks of a column.
    pub async fn max_order_index<'e, E>(
        executor: E,
        project_id: Uuid,
        status: &str,
    ) -> DbErrorResult<Option<i32>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT MAX(order_index) AS max_index
                FROM hub_tasks
                WHERE project_id = ? AND status = ? AND deleted_at IS NULL
            "#,
        )
        .bind(project_id.to_string())
        .bind(status)
        .fetch_one(executor)
        .await?;

        let max_index: Option<i64> = row.try_get("max_index")?;

        Ok(max_index.map(|m| i32::try_from(m).unwrap_or(i32::MAX)))
    }

    /// Write the editable fields of `task` if the stored row is live and
    /// still at `expected_version`. Returns whether the row was written.
    pub async fn update_if_version<'e, E>(
        executor: E,
        task: &Task,
        expected_version: i32,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE hub_tasks
                SET title = ?, description = ?, status = ?, priority = ?, assignee_id = ?,
                    due_date = ?, tags = ?, order_index = ?,
                    version = version + 1, updated_at = ?, updated_by = ?
                WHERE id = ? AND version = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.status)
        .bind(task.priority.as_str())
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(task.due_date.map(millis))
        .bind(encode_list("tags", &task.tags)?)
        .bind(task.order_index)
        .bind(millis(task.updated_at))
        .bind(task.updated_by.to_string())
        .bind(task.id.to_string())
        .bind(expected_version)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn soft_delete_if_version<'e, E>(
        executor: E,
        id: Uuid,
        expected_version: i32,
        deleted_by: Uuid,
        deleted_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let at = millis(deleted_at);

        let result = sqlx::query(
            r#"
                UPDATE hub_tasks
                SET deleted_at = ?, updated_at = ?, updated_by = ?, version = version + 1
                WHERE id = ? AND version = ? AND deleted_at IS NULL
            "#,
        )
        .bind(at)
        .bind(at)
        .bind(deleted_by.to_string())
        .bind(id.to_string())
        .bind(expected_version)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn restore_if_version<'e, E>(
        executor: E,
        id: Uuid,
        expected_version: i32,
        restored_by: Uuid,
        restored_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE hub_tasks
                SET deleted_at = NULL, updated_at = ?, updated_by = ?, version = version + 1
                WHERE id = ? AND version = ? AND deleted_at IS NOT NULL
            "#,
        )
        .bind(millis(restored_at))
        .bind(restored_by.to_string())
        .bind(id.to_string())
        .bind(expected_version)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Place a live task in `status` at `order_index`, bumping its version
    /// without a version check. Returns whether a row was written.
    pub async fn set_position<'e, E>(
        executor: E,
        id: Uuid,
        status: &str,
        order_index: i32,
        updated_by: Uuid,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE hub_tasks
                SET status = ?, order_index = ?, version = version + 1,
                    updated_at = ?, updated_by = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(status)
        .bind(order_index)
        .bind(millis(updated_at))
        .bind(updated_by.to_string())
        .bind(id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

fn map_task(row: &SqliteRow) -> DbErrorResult<Task> {
    let r = RowReader::new(row, "hub_tasks");

    Ok(Task {
        id: r.uuid("id")?,
        project_id: r.uuid("project_id")?,
        title: r.string("title")?,
        description: r.optional_string("description")?,
        status: r.string("status")?,
        priority: r.parsed::<TaskPriority>("priority")?,
        assignee_id: r.optional_uuid("assignee_id")?,
        due_date: r.optional_timestamp("due_date")?,
        tags: r.list("tags")?,
        order_index: r.int("order_index")?,
        version: r.int("version")?,
        created_at: r.timestamp("created_at")?,
        updated_at: r.timestamp("updated_at")?,
        created_by: r.uuid("created_by")?,
        updated_by: r.uuid("updated_by")?,
        deleted_at: r.optional_timestamp("deleted_at")?,
    })
}
