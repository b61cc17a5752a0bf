//! Project operations.

use crate::context::log_prefix;
use crate::guarded_write::{guarded_restore, guarded_soft_delete, guarded_update};
use crate::{
    MutationContext, MutationError, NewProject, Result as MutationErrorResult, require_admin,
};

use hub_core::{ActivityLogEntry, Actor, EntityType, MutationOutcome, Project, ProjectPatch};
use hub_db::ProjectRepository;

use log::{debug, info};
use serde_json::json;
use uuid::Uuid;

pub async fn create(
    ctx: &MutationContext,
    actor: &Actor,
    input: NewProject,
) -> MutationErrorResult<Project> {
    let prefix = log_prefix(actor);
    debug!("{prefix} CreateProject starting");

    let validator = ctx.validator();
    validator.new_project(&input)?;

    let mut project = Project::new(validator.title("name", &input.name)?, actor.id);
    project.client_name = input
        .client_name
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    if let Some(statuses) = &input.statuses {
        project.statuses = validator.statuses(statuses)?;
    }
    if let Some(priorities) = input.priorities {
        project.priorities = priorities;
    }
    if let Some(tags) = input.tags {
        project.tags = tags;
    }

    ProjectRepository::create(&ctx.pool, &project).await?;
    info!("{prefix} Created project {} ({})", project.id, project.name);

    ctx.recorder
        .record(ActivityLogEntry::created(
            actor.id,
            EntityType::Project,
            project.id,
            Some(json!({
                "name": project.name,
                "client_name": project.client_name,
            })),
        ))
        .await;

    Ok(project)
}

/// Direct lookup; soft-deleted projects are returned with `deleted_at` set.
pub async fn get(ctx: &MutationContext, id: Uuid) -> MutationErrorResult<Project> {
    ProjectRepository::find_by_id(&ctx.pool, id)
        .await?
        .ok_or_else(|| MutationError::not_found(EntityType::Project, id))
}

pub async fn list(
    ctx: &MutationContext,
    actor: &Actor,
    include_deleted: bool,
) -> MutationErrorResult<Vec<Project>> {
    if include_deleted {
        require_admin(actor, "list deleted projects")?;
    }

    Ok(ProjectRepository::list(&ctx.pool, include_deleted).await?)
}

pub async fn update(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
    patch: ProjectPatch,
) -> MutationErrorResult<MutationOutcome<Project>> {
    debug!("{} UpdateProject {id} starting", log_prefix(actor));

    ctx.validator().project_patch(&patch)?;

    guarded_update(ctx, actor, id, expected_version, |project: &mut Project| {
        Ok(patch.apply_to(project)?)
    })
    .await
}

pub async fn soft_delete(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
) -> MutationErrorResult<MutationOutcome<Project>> {
    debug!("{} DeleteProject {id} starting", log_prefix(actor));

    guarded_soft_delete(ctx, actor, id, expected_version).await
}

/// Admin only; the role check runs before the project is read.
pub async fn restore(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
) -> MutationErrorResult<MutationOutcome<Project>> {
    debug!("{} RestoreProject {id} starting", log_prefix(actor));

    guarded_restore(ctx, actor, id, expected_version).await
}
