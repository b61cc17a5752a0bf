//! Comment REST API handlers

use crate::{ApiResult, AppState, CommentListResponse, CommentResponse, CurrentActor};

use hub_mutation::{NewComment, comment};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

/// GET /api/v1/tasks/{task_id}/comments
///
/// Newest first.
pub async fn list_comments(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    Path(task_id): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let task_uuid = Uuid::parse_str(&task_id)?;

    let comments = comment::list_for_task(&state.mutation, task_uuid).await?;

    Ok(Json(CommentListResponse { comments }))
}

/// POST /api/v1/comments
pub async fn create_comment(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    payload: Result<Json<NewComment>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let Json(req) = payload?;

    let comment = comment::create(&state.mutation, &actor, req).await?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}
