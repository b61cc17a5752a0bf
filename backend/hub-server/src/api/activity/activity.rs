//! Activity log REST API handler

use crate::{ActivityListResponse, ApiResult, AppState, CurrentActor};

use hub_mutation::{ActivityQuery, activity};

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

/// GET /api/v1/activity
///
/// Newest first. `limit` is clamped to the configured bounds.
pub async fn list_activity(
    State(state): State<AppState>,
    CurrentActor(_actor): CurrentActor,
    query: Result<Query<ActivityQuery>, QueryRejection>,
) -> ApiResult<Json<ActivityListResponse>> {
    let Query(query) = query?;

    let entries = activity::query(&state.mutation, query).await?;

    Ok(Json(ActivityListResponse { entries }))
}
