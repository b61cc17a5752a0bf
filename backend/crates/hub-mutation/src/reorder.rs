//! Kanban column ordering.
//!
//! Reorders rewrite a whole column at evenly spaced indices. They run
//! without the per-task version guard and without activity entries: one drag
//! gesture touches every task in the column. Each batch runs in one
//! transaction that holds the write lock from its first read.

use crate::context::log_prefix;
use crate::task::{check_status_membership, load_live_project};
use crate::{
    BulkOrderItem, MutationContext, MutationError, ReorderRequest, Result as MutationErrorResult,
};

use hub_core::{Actor, EntityType, Task, assign_order_indices, clock, plan_column_drop};
use hub_db::TaskRepository;

use std::collections::HashSet;

use log::{debug, info};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Write the final order of one column. Returns the column in its new order.
pub async fn reorder(
    ctx: &MutationContext,
    actor: &Actor,
    request: ReorderRequest,
) -> MutationErrorResult<Vec<Task>> {
    debug!(
        "{} Reorder {} / {} ({} tasks) starting",
        log_prefix(actor),
        request.project_id,
        request.status,
        request.ordered_task_ids.len()
    );

    let status = ctx.validator().status(&request.status)?;

    let mut tx = ctx.begin_write().await?;
    rewrite_column(
        ctx,
        &mut tx,
        actor,
        request.project_id,
        &status,
        &request.ordered_task_ids,
        request.moved_task_id,
    )
    .await?;
    let column = TaskRepository::find_column(&mut *tx, request.project_id, &status).await?;
    tx.commit().await?;

    Ok(column)
}

/// Drop `task_id` into `status` at `drop_index` and renumber the column.
///
/// The drop is planned against the column as it stands under the write lock.
pub async fn move_task(
    ctx: &MutationContext,
    actor: &Actor,
    task_id: Uuid,
    status: &str,
    drop_index: usize,
) -> MutationErrorResult<Vec<Task>> {
    debug!(
        "{} MoveTask {task_id} to {status}[{drop_index}] starting",
        log_prefix(actor)
    );

    let status = ctx.validator().status(status)?;

    let mut tx = ctx.begin_write().await?;
    let task = TaskRepository::find_by_id(&mut *tx, task_id)
        .await?
        .filter(|t| !t.is_deleted())
        .ok_or_else(|| MutationError::not_found(EntityType::Task, task_id))?;

    let entries = TaskRepository::find_column_entries(&mut *tx, task.project_id, &status).await?;
    let ordered_task_ids = plan_column_drop(&entries, task_id, drop_index);

    rewrite_column(
        ctx,
        &mut tx,
        actor,
        task.project_id,
        &status,
        &ordered_task_ids,
        task_id,
    )
    .await?;
    let column = TaskRepository::find_column(&mut *tx, task.project_id, &status).await?;
    tx.commit().await?;

    Ok(column)
}

/// Renumber `ordered_task_ids` into `status`. Runs inside the caller's transaction.
async fn rewrite_column(
    ctx: &MutationContext,
    conn: &mut SqliteConnection,
    actor: &Actor,
    project_id: Uuid,
    status: &str,
    ordered_task_ids: &[Uuid],
    moved_task_id: Uuid,
) -> MutationErrorResult<()> {
    let assignments = assign_order_indices(ordered_task_ids)?;
    if !ordered_task_ids.contains(&moved_task_id) {
        return Err(MutationError::validation(
            "moved_task_id",
            format!("Moved task {moved_task_id} is not part of the new order"),
        ));
    }

    let project = load_live_project(&mut *conn, project_id).await?;
    check_status_membership(ctx, &project, status)?;

    let now = clock::now();
    for assignment in &assignments {
        let task = TaskRepository::find_by_id(&mut *conn, assignment.task_id)
            .await?
            .filter(|t| !t.is_deleted())
            .ok_or_else(|| MutationError::not_found(EntityType::Task, assignment.task_id))?;

        if task.project_id != project.id {
            return Err(MutationError::validation(
                "ordered_task_ids",
                format!("Task {} does not belong to project {}", task.id, project.id),
            ));
        }

        let written = TaskRepository::set_position(
            &mut *conn,
            assignment.task_id,
            status,
            assignment.order_index,
            actor.id,
            now,
        )
        .await?;
        if !written {
            return Err(MutationError::not_found(
                EntityType::Task,
                assignment.task_id,
            ));
        }
    }

    info!(
        "{} Reordered {} task(s) in {} / {status} (moved {moved_task_id})",
        log_prefix(actor),
        assignments.len(),
        project.id
    );
    Ok(())
}

/// Write client-computed positions verbatim. Returns the number of tasks written.
pub async fn bulk_order(
    ctx: &MutationContext,
    actor: &Actor,
    items: Vec<BulkOrderItem>,
) -> MutationErrorResult<usize> {
    let prefix = log_prefix(actor);
    debug!("{prefix} BulkOrder ({} items) starting", items.len());

    if items.is_empty() {
        return Err(MutationError::validation("items", "No tasks to order"));
    }

    let validator = ctx.validator();
    let mut seen = HashSet::with_capacity(items.len());
    let mut statuses = Vec::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id) {
            return Err(MutationError::validation(
                "items",
                format!("Task {} listed more than once", item.id),
            ));
        }
        if item.order_index < 0 {
            return Err(MutationError::validation(
                "order_index",
                "Order index must be non-negative",
            ));
        }
        statuses.push(validator.status(&item.status)?);
    }

    let now = clock::now();
    let mut tx = ctx.begin_write().await?;

    for (item, status) in items.iter().zip(&statuses) {
        let written =
            TaskRepository::set_position(&mut *tx, item.id, status, item.order_index, actor.id, now)
                .await?;
        if !written {
            return Err(MutationError::not_found(EntityType::Task, item.id));
        }
    }

    tx.commit().await?;

    info!("{prefix} Bulk ordered {} task(s)", items.len());
    Ok(items.len())
}
