//! Task operations.

use crate::context::log_prefix;
use crate::guarded_write::{guarded_restore, guarded_soft_delete, guarded_update};
use crate::{
    MutationContext, MutationError, NewTask, Result as MutationErrorResult, TaskQuery,
    require_admin,
};

use hub_core::{
    ActivityLogEntry, Actor, DEFAULT_STATUSES, EntityType, MutationOutcome, Patch, Project, Task,
    TaskPatch, next_order_index,
};
use hub_db::{ProjectRepository, TaskFilter, TaskRepository};

use log::{debug, info};
use serde_json::json;
use uuid::Uuid;

pub async fn create(
    ctx: &MutationContext,
    actor: &Actor,
    input: NewTask,
) -> MutationErrorResult<Task> {
    let prefix = log_prefix(actor);
    debug!("{prefix} CreateTask starting");

    // 1. Validate input
    let validator = ctx.validator();
    validator.new_task(&input)?;
    let title = validator.title("title", &input.title)?;

    // 2. Owning project must be live; the column tail is read under the
    //    write lock so concurrent appends get distinct positions
    let mut tx = ctx.begin_write().await?;
    let project = load_live_project(&mut *tx, input.project_id).await?;

    // 3. Resolve the column
    let status = match &input.status {
        Some(status) => validator.status(status)?,
        None => project
            .first_status()
            .unwrap_or(DEFAULT_STATUSES[0])
            .to_string(),
    };
    check_status_membership(ctx, &project, &status)?;

    // 4. Position: explicit, or appended to the column
    let order_index = match input.order_index {
        Some(order_index) => order_index,
        None => {
            let max = TaskRepository::max_order_index(&mut *tx, project.id, &status).await?;
            next_order_index(max)
        }
    };

    let mut task = Task::new(project.id, title, status, actor.id);
    task.description = input
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    task.priority = input.priority.unwrap_or_default();
    task.assignee_id = input.assignee_id;
    task.due_date = input.due_date;
    task.tags = input.tags.unwrap_or_default();
    task.order_index = order_index;

    TaskRepository::create(&mut *tx, &task).await?;
    tx.commit().await?;
    info!(
        "{prefix} Created task {} in {} / {} at {}",
        task.id, project.id, task.status, task.order_index
    );

    ctx.recorder
        .record(ActivityLogEntry::created(
            actor.id,
            EntityType::Task,
            task.id,
            Some(json!({
                "title": task.title,
                "status": task.status,
                "priority": task.priority,
            })),
        ))
        .await;

    Ok(task)
}

/// Direct lookup; soft-deleted tasks are returned with `deleted_at` set.
pub async fn get(ctx: &MutationContext, id: Uuid) -> MutationErrorResult<Task> {
    TaskRepository::find_by_id(&ctx.pool, id)
        .await?
        .ok_or_else(|| MutationError::not_found(EntityType::Task, id))
}

pub async fn list(
    ctx: &MutationContext,
    actor: &Actor,
    query: TaskQuery,
) -> MutationErrorResult<Vec<Task>> {
    if query.include_deleted {
        require_admin(actor, "list deleted tasks")?;
    }

    let filter = TaskFilter {
        project_id: query.project_id,
        status: query.status,
        assignee_id: if query.my_tasks {
            Some(actor.id)
        } else {
            query.assignee_id
        },
        priority: query.priority,
        due_before: query.due_before,
        include_deleted: query.include_deleted,
    };

    Ok(TaskRepository::list(&ctx.pool, &filter).await?)
}

pub async fn update(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
    patch: TaskPatch,
) -> MutationErrorResult<MutationOutcome<Task>> {
    debug!("{} UpdateTask {id} starting", log_prefix(actor));

    ctx.validator().task_patch(&patch)?;

    if ctx.validation.enforce_status_membership
        && let Patch::Value(status) = &patch.status
    {
        let task = TaskRepository::find_by_id(&ctx.pool, id)
            .await?
            .filter(|t| !t.is_deleted())
            .ok_or_else(|| MutationError::not_found(EntityType::Task, id))?;
        let project = load_live_project(&ctx.pool, task.project_id).await?;
        check_status_membership(ctx, &project, status.trim())?;
    }

    guarded_update(ctx, actor, id, expected_version, |task: &mut Task| {
        Ok(patch.apply_to(task)?)
    })
    .await
}

pub async fn soft_delete(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
) -> MutationErrorResult<MutationOutcome<Task>> {
    debug!("{} DeleteTask {id} starting", log_prefix(actor));

    guarded_soft_delete(ctx, actor, id, expected_version).await
}

/// Admin only; the role check runs before the task is read.
pub async fn restore(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
) -> MutationErrorResult<MutationOutcome<Task>> {
    debug!("{} RestoreTask {id} starting", log_prefix(actor));

    guarded_restore(ctx, actor, id, expected_version).await
}

pub(crate) async fn load_live_project<'e, E>(
    executor: E,
    project_id: Uuid,
) -> MutationErrorResult<Project>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    ProjectRepository::find_by_id(executor, project_id)
        .await?
        .filter(|p| !p.is_deleted())
        .ok_or_else(|| MutationError::not_found(EntityType::Project, project_id))
}

pub(crate) fn check_status_membership(
    ctx: &MutationContext,
    project: &Project,
    status: &str,
) -> MutationErrorResult<()> {
    if ctx.validation.enforce_status_membership && !project.has_status(status) {
        return Err(MutationError::validation(
            "status",
            format!("Status '{status}' is not a column of project {}", project.id),
        ));
    }
    Ok(())
}
