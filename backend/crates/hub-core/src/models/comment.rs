use crate::clock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest body excerpt copied into the activity log
pub const COMMENT_SNAPSHOT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub task_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(task_id: Uuid, author_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            author_id,
            body,
            created_at: clock::now(),
        }
    }

    /// Body truncated for audit snapshots
    pub fn body_excerpt(&self) -> String {
        self.body.chars().take(COMMENT_SNAPSHOT_CHARS).collect()
    }
}
