use crate::repositories::row::{RowReader, encode_list, millis};
use crate::Result as DbErrorResult;

use hub_core::Project;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

const PROJECT_COLUMNS: &str = r#"
    id, name, client_name, status, statuses, priorities, tags,
    version, created_at, updated_at, created_by, updated_by, deleted_at
"#;

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO hub_projects (
                    id, name, client_name, status, statuses, priorities, tags,
                    version, created_at, updated_at, created_by, updated_by, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.name)
        .bind(&project.client_name)
        .bind(&project.status)
        .bind(encode_list("statuses", &project.statuses)?)
        .bind(encode_list("priorities", &project.priorities)?)
        .bind(encode_list("tags", &project.tags)?)
        .bind(project.version)
        .bind(millis(project.created_at))
        .bind(millis(project.updated_at))
        .bind(project.created_by.to_string())
        .bind(project.updated_by.to_string())
        .bind(project.deleted_at.map(millis))
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Look up a project by id, soft-deleted or not.
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM hub_projects WHERE id = ?");

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(map_project).transpose()
    }

    /// Most recently updated first.
    pub async fn list<'e, E>(executor: E, include_deleted: bool) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = if include_deleted {
            format!("SELECT {PROJECT_COLUMNS} FROM hub_projects ORDER BY updated_at DESC, rowid DESC")
        } else {
            format!(
                "SELECT {PROJECT_COLUMNS} FROM hub_projects WHERE deleted_at IS NULL ORDER BY updated_at DESC, rowid DESC"
            )
        };

        let rows = sqlx::query(&sql).fetch_all(executor).await?;

        rows.iter().map(map_project).collect()
    }

    /// Write the editable fields of `project` if the stored row is live and
    /// still at `expected_version`. The stored version becomes
    /// `expected_version + 1`. Returns whether the row was written.
    pub async fn update_if_version<'e, E>(
        executor: E,
        project: &Project,
        expected_version: i32,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE hub_projects
                SET name = ?, client_name = ?, status = ?, statuses = ?, priorities = ?, tags = ?,
                    version = version + 1, updated_at = ?, updated_by = ?
                WHERE id = ? AND version = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&project.name)
        .bind(&project.client_name)
        .bind(&project.status)
        .bind(encode_list("statuses", &project.statuses)?)
        .bind(encode_list("priorities", &project.priorities)?)
        .bind(encode_list("tags", &project.tags)?)
        .bind(millis(project.updated_at))
        .bind(project.updated_by.to_string())
        .bind(project.id.to_string())
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
                UPDATE hub_projects
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
                UPDATE hub_projects
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
}

fn map_project(row: &SqliteRow) -> DbErrorResult<Project> {
    let r = RowReader::new(row, "hub_projects");

    Ok(Project {
        id: r.uuid("id")?,
        name: r.string("name")?,
        client_name: r.optional_string("client_name")?,
        status: r.string("status")?,
        statuses: r.list("statuses")?,
        priorities: r.list("priorities")?,
        tags: r.list("tags")?,
        version: r.int("version")?,
        created_at: r.timestamp("created_at")?,
        updated_at: r.timestamp("updated_at")?,
        created_by: r.uuid("created_by")?,
        updated_by: r.uuid("updated_by")?,
        deleted_at: r.optional_timestamp("deleted_at")?,
    })
}
