//! Best-effort audit trail.
//!
//! The recorder runs after the primary write has committed. A failed append
//! is logged and dropped; it never reaches the caller of the mutation.

use hub_core::ActivityLogEntry;
use hub_db::{ActivityLogRepository, Result as DbErrorResult};

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use sqlx::SqlitePool;

/// Destination for activity entries.
#[async_trait]
pub trait ActivitySink: Send + Sync {
    async fn append(&self, entry: &ActivityLogEntry) -> DbErrorResult<()>;
}

pub struct SqliteActivitySink {
    pool: SqlitePool,
}

impl SqliteActivitySink {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivitySink for SqliteActivitySink {
    async fn append(&self, entry: &ActivityLogEntry) -> DbErrorResult<()> {
        ActivityLogRepository::create(&self.pool, entry).await
    }
}

#[derive(Clone)]
pub struct ActivityRecorder {
    sink: Arc<dyn ActivitySink>,
}

impl ActivityRecorder {
    pub fn new(sink: Arc<dyn ActivitySink>) -> Self {
        Self { sink }
    }

    pub fn sqlite(pool: SqlitePool) -> Self {
        Self::new(Arc::new(SqliteActivitySink::new(pool)))
    }

    /// Append `entry`. Returns whether it was stored; failures are only logged.
    pub async fn record(&self, entry: ActivityLogEntry) -> bool {
        match self.sink.append(&entry).await {
            Ok(()) => {
                debug!(
                    "Recorded {} {} {} by {}",
                    entry.entity_type, entry.action, entry.entity_id, entry.actor_id
                );
                true
            }
            Err(e) => {
                error!(
                    "Failed to record activity ({} {} {}): {}",
                    entry.entity_type, entry.action, entry.entity_id, e
                );
                false
            }
        }
    }
}
