use crate::repositories::row::{RowReader, encode_json, millis};
use crate::Result as DbErrorResult;

use hub_core::{ActivityAction, ActivityLogEntry, EntityType};

use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

/// Activity feed query. `limit` is applied as given; callers clamp it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLogQuery {
    pub entity_type: Option<EntityType>,
    pub entity_id: Option<Uuid>,
    pub limit: i64,
}

impl ActivityLogQuery {
    pub fn recent(limit: i64) -> Self {
        Self {
            entity_type: None,
            entity_id: None,
            limit,
        }
    }

    pub fn for_entity(entity_type: EntityType, entity_id: Uuid, limit: i64) -> Self {
        Self {
            entity_type: Some(entity_type),
            entity_id: Some(entity_id),
            limit,
        }
    }
}

pub struct ActivityLogRepository;

impl ActivityLogRepository {
    pub async fn create<'e, E>(executor: E, entry: &ActivityLogEntry) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO hub_activity_log (
                    id, actor_id, entity_type, entity_id, action,
                    before_json, after_json, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entry.id.to_string())
        .bind(entry.actor_id.to_string())
        .bind(entry.entity_type.as_str())
        .bind(entry.entity_id.to_string())
        .bind(entry.action.as_str())
        .bind(encode_json("before_json", entry.before.as_ref())?)
        .bind(encode_json("after_json", entry.after.as_ref())?)
        .bind(millis(entry.created_at))
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Matching entries, newest first. Entries written in the same
    /// millisecond come back in reverse insertion order.
    pub async fn find<'e, E>(
        executor: E,
        query: &ActivityLogQuery,
    ) -> DbErrorResult<Vec<ActivityLogEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
                SELECT id, actor_id, entity_type, entity_id, action,
                       before_json, after_json, created_at
                FROM hub_activity_log
                WHERE 1 = 1
            "#,
        );

        if let Some(entity_type) = query.entity_type {
            builder
                .push(" AND entity_type = ")
                .push_bind(entity_type.as_str());
        }
        if let Some(entity_id) = query.entity_id {
            builder
                .push(" AND entity_id = ")
                .push_bind(entity_id.to_string());
        }
        builder
            .push(" ORDER BY created_at DESC, rowid DESC LIMIT ")
            .push_bind(query.limit);

        let rows = builder.build().fetch_all(executor).await?;

        rows.iter().map(map_entry).collect()
    }

    pub async fn count_for_entity<'e, E>(
        executor: E,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM hub_activity_log WHERE entity_type = ? AND entity_id = ?",
        )
        .bind(entity_type.as_str())
        .bind(entity_id.to_string())
        .fetch_one(executor)
        .await?;

        Ok(count)
    }
}

fn map_entry(row: &SqliteRow) -> DbErrorResult<ActivityLogEntry> {
    let r = RowReader::new(row, "hub_activity_log");

    Ok(ActivityLogEntry {
        id: r.uuid("id")?,
        actor_id: r.uuid("actor_id")?,
        entity_type: r.parsed::<EntityType>("entity_type")?,
        entity_id: r.uuid("entity_id")?,
        action: r.parsed::<ActivityAction>("action")?,
        before: r.optional_json("before_json")?,
        after: r.optional_json("after_json")?,
        created_at: r.timestamp("created_at")?,
    })
}
