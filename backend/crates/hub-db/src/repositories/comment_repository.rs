use crate::repositories::row::{RowReader, millis};
use crate::Result as DbErrorResult;

use hub_core::Comment;

use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct CommentRepository;

impl CommentRepository {
    pub async fn create<'e, E>(executor: E, comment: &Comment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO hub_comments (id, task_id, author_id, body, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.task_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.body)
        .bind(millis(comment.created_at))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, task_id, author_id, body, created_at
                FROM hub_comments
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(map_comment).transpose()
    }

    /// Comments on a task, newest first.
    pub async fn find_by_task<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, task_id, author_id, body, created_at
                FROM hub_comments
                WHERE task_id = ?
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .bind(task_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(map_comment).collect()
    }
}

fn map_comment(row: &SqliteRow) -> DbErrorResult<Comment> {
    let r = RowReader::new(row, "hub_comments");

    Ok(Comment {
        id: r.uuid("id")?,
        task_id: r.uuid("task_id")?,
        author_id: r.uuid("author_id")?,
        body: r.string("body")?,
        created_at: r.timestamp("created_at")?,
    })
}
