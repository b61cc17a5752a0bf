use crate::{ActivityAction, EntityType, FieldChanges, clock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Immutable audit record of a single mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub actor_id: Uuid,

    pub entity_type: EntityType,
    pub entity_id: Uuid,

    pub action: ActivityAction,

    /// Values of the affected fields before the mutation
    pub before: Option<Value>,
    /// Values of the affected fields after the mutation
    pub after: Option<Value>,

    pub created_at: DateTime<Utc>,
}

impl ActivityLogEntry {
    pub fn new(
        actor_id: Uuid,
        entity_type: EntityType,
        entity_id: Uuid,
        action: ActivityAction,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor_id,
            entity_type,
            entity_id,
            action,
            before,
            after,
            created_at: clock::now(),
        }
    }

    pub fn created(
        actor_id: Uuid,
        entity_type: EntityType,
        entity_id: Uuid,
        after: Option<Value>,
    ) -> Self {
        Self::new(
            actor_id,
            entity_type,
            entity_id,
            ActivityAction::Created,
            None,
            after,
        )
    }

    pub fn updated(
        actor_id: Uuid,
        entity_type: EntityType,
        entity_id: Uuid,
        changes: FieldChanges,
    ) -> Self {
        let (before, after) = changes.into_snapshots();
        Self::new(
            actor_id,
            entity_type,
            entity_id,
            ActivityAction::Updated,
            before,
            after,
        )
    }

    pub fn deleted(actor_id: Uuid, entity_type: EntityType, entity_id: Uuid) -> Self {
        Self::new(
            actor_id,
            entity_type,
            entity_id,
            ActivityAction::Deleted,
            None,
            None,
        )
    }

    pub fn restored(actor_id: Uuid, entity_type: EntityType, entity_id: Uuid) -> Self {
        Self::new(
            actor_id,
            entity_type,
            entity_id,
            ActivityAction::Restored,
            None,
            None,
        )
    }
}
