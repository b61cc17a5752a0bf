use crate::context::log_prefix;
use crate::{MutationContext, MutationError, NewComment, Result as MutationErrorResult};

use hub_core::{ActivityLogEntry, Actor, Comment, EntityType};
use hub_db::{CommentRepository, TaskRepository};

use log::{debug, info};
use serde_json::json;
use uuid::Uuid;

/// Add a comment to a live task.
pub async fn create(
    ctx: &MutationContext,
    actor: &Actor,
    input: NewComment,
) -> MutationErrorResult<Comment> {
    let prefix = log_prefix(actor);
    debug!("{prefix} CreateComment on task {} starting", input.task_id);

    let body = ctx.validator().comment_body(&input.body)?;

    TaskRepository::find_by_id(&ctx.pool, input.task_id)
        .await?
        .filter(|t| !t.is_deleted())
        .ok_or_else(|| MutationError::not_found(EntityType::Task, input.task_id))?;

    let comment = Comment::new(input.task_id, actor.id, body);
    CommentRepository::create(&ctx.pool, &comment).await?;
    info!("{prefix} Created comment {} on task {}", comment.id, comment.task_id);

    ctx.recorder
        .record(ActivityLogEntry::created(
            actor.id,
            EntityType::Comment,
            comment.id,
            Some(json!({
                "task_id": comment.task_id,
                "body": comment.body_excerpt(),
            })),
        ))
        .await;

    Ok(comment)
}

/// Comments of a task, newest first. Soft-deleted tasks keep their comments readable.
pub async fn list_for_task(
    ctx: &MutationContext,
    task_id: Uuid,
) -> MutationErrorResult<Vec<Comment>> {
    if TaskRepository::find_by_id(&ctx.pool, task_id).await?.is_none() {
        return Err(MutationError::not_found(EntityType::Task, task_id));
    }

    Ok(CommentRepository::find_by_task(&ctx.pool, task_id).await?)
}
