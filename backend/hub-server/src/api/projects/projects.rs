//! Project REST API handlers

use crate::api::error::applied;
use crate::{
    ApiResult, AppState, CurrentActor, DeleteQuery, ListProjectsQuery, ProjectListResponse,
    ProjectResponse, UpdateRequest,
};

use hub_core::ProjectPatch;
use hub_mutation::{NewProject, project};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    query: Result<Query<ListProjectsQuery>, QueryRejection>,
) -> ApiResult<Json<ProjectListResponse>> {
    let Query(query) = query?;

    let projects = project::list(&state.mutation, &actor, query.include_deleted).await?;

    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let Json(req) = payload?;

    let project = project::create(&state.mutation, &actor, req).await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse { project })))
}

/// GET /api/v1/projects/{id}
///
/// Soft-deleted projects are returned too, with `deleted_at` set.
pub async fn get_project(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;

    let project = project::get(&state.mutation, project_id).await?;

    Ok(Json(ProjectResponse { project }))
}

/// PATCH /api/v1/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRequest<ProjectPatch>>, JsonRejection>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let Json(req) = payload?;

    let outcome = project::update(
        &state.mutation,
        &actor,
        project_id,
        req.expected_version,
        req.fields,
    )
    .await?;

    Ok(Json(ProjectResponse {
        project: applied(outcome)?,
    }))
}

/// DELETE /api/v1/projects/{id}
///
/// Soft delete, or restore with `?restore=true`.
pub async fn delete_project(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> ApiResult<Json<ProjectResponse>> {
    let project_id = Uuid::parse_str(&id)?;
    let Query(query) = query?;

    let outcome = if query.restore {
        project::restore(&state.mutation, &actor, project_id, query.expected_version).await?
    } else {
        project::soft_delete(&state.mutation, &actor, project_id, query.expected_version).await?
    };

    Ok(Json(ProjectResponse {
        project: applied(outcome)?,
    }))
}
