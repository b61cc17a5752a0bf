//! Task REST API handlers
//!
//! Single-task edits go through the version guard. The move, reorder and
//! bulk-order endpoints rewrite column positions without it.

use crate::api::error::applied;
use crate::{
    ApiResult, AppState, BulkOrderRequest, BulkOrderResponse, CurrentActor, DeleteQuery,
    MoveTaskRequest, TaskListResponse, TaskResponse, UpdateRequest,
};

use hub_core::TaskPatch;
use hub_mutation::{NewTask, ReorderRequest, TaskQuery, reorder, task};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/v1/tasks
///
/// Ordered by `order_index`, then creation time.
pub async fn list_tasks(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    query: Result<Query<TaskQuery>, QueryRejection>,
) -> ApiResult<Json<TaskListResponse>> {
    let Query(query) = query?;

    let tasks = task::list(&state.mutation, &actor, query).await?;

    Ok(Json(TaskListResponse { tasks }))
}

/// POST /api/v1/tasks
pub async fn create_task(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TaskResponse>)> {
    let Json(req) = payload?;

    let task = task::create(&state.mutation, &actor, req).await?;

    Ok((StatusCode::CREATED, Json(TaskResponse { task })))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;

    let task = task::get(&state.mutation, task_id).await?;

    Ok(Json(TaskResponse { task }))
}

/// PATCH /api/v1/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
    payload: Result<Json<UpdateRequest<TaskPatch>>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;
    let Json(req) = payload?;

    let outcome = task::update(
        &state.mutation,
        &actor,
        task_id,
        req.expected_version,
        req.fields,
    )
    .await?;

    Ok(Json(TaskResponse {
        task: applied(outcome)?,
    }))
}

/// DELETE /api/v1/tasks/{id}
///
/// Soft delete, or restore with `?restore=true`.
pub async fn delete_task(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
    query: Result<Query<DeleteQuery>, QueryRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = Uuid::parse_str(&id)?;
    let Query(query) = query?;

    let outcome = if query.restore {
        task::restore(&state.mutation, &actor, task_id, query.expected_version).await?
    } else {
        task::soft_delete(&state.mutation, &actor, task_id, query.expected_version).await?
    };

    Ok(Json(TaskResponse {
        task: applied(outcome)?,
    }))
}

/// POST /api/v1/tasks/{id}/move
///
/// Returns the destination column in its new order.
pub async fn move_task(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<String>,
    payload: Result<Json<MoveTaskRequest>, JsonRejection>,
) -> ApiResult<Json<TaskListResponse>> {
    let task_id = Uuid::parse_str(&id)?;
    let Json(req) = payload?;

    let tasks =
        reorder::move_task(&state.mutation, &actor, task_id, &req.status, req.drop_index).await?;

    Ok(Json(TaskListResponse { tasks }))
}

/// PATCH /api/v1/tasks/reorder
pub async fn reorder_tasks(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> ApiResult<Json<TaskListResponse>> {
    let Json(req) = payload?;

    let tasks = reorder::reorder(&state.mutation, &actor, req).await?;

    Ok(Json(TaskListResponse { tasks }))
}

/// PATCH /api/v1/tasks/bulk-order
pub async fn bulk_order_tasks(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    payload: Result<Json<BulkOrderRequest>, JsonRejection>,
) -> ApiResult<Json<BulkOrderResponse>> {
    let Json(req) = payload?;

    let updated = reorder::bulk_order(&state.mutation, &actor, req.items).await?;

    Ok(Json(BulkOrderResponse {
        success: true,
        updated,
    }))
}
