use crate::{ActivityQuery, MutationContext, Result as MutationErrorResult};

use hub_core::ActivityLogEntry;
use hub_db::{ActivityLogQuery, ActivityLogRepository};

/// Recent activity, newest first, optionally narrowed to one entity.
///
/// The requested limit is clamped to the configured bounds.
pub async fn query(
    ctx: &MutationContext,
    query: ActivityQuery,
) -> MutationErrorResult<Vec<ActivityLogEntry>> {
    let db_query = ActivityLogQuery {
        entity_type: query.entity_type,
        entity_id: query.entity_id,
        limit: ctx.activity_log.effective_limit(query.limit),
    };

    Ok(ActivityLogRepository::find(&ctx.pool, &db_query).await?)
}
