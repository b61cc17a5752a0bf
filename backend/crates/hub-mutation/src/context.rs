use crate::{ActivityRecorder, Result as MutationErrorResult, Validator};

use hub_config::{ActivityLogConfig, Config, MutationConfig, ValidationConfig};
use hub_core::Actor;

use std::time::Duration;

use log::warn;
use sqlx::{Sqlite, SqlitePool, Transaction};

const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const BUSY_BACKOFF: Duration = Duration::from_millis(50);

/// Shared resources for every pipeline operation.
#[derive(Clone)]
pub struct MutationContext {
    pub pool: SqlitePool,
    pub recorder: ActivityRecorder,
    pub validation: ValidationConfig,
    pub activity_log: ActivityLogConfig,
    pub mutation: MutationConfig,
}

impl MutationContext {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            recorder: ActivityRecorder::sqlite(pool.clone()),
            pool,
            validation: config.validation.clone(),
            activity_log: config.activity_log.clone(),
            mutation: config.mutation.clone(),
        }
    }

    /// Replace the activity recorder (tests swap in failing sinks).
    pub fn with_recorder(mut self, recorder: ActivityRecorder) -> Self {
        self.recorder = recorder;
        self
    }

    pub fn validator(&self) -> Validator<'_> {
        Validator::new(&self.validation)
    }

    /// Open a transaction that holds the database write lock from its first
    /// statement.
    ///
    /// Reads made through the transaction see the state its writes replace,
    /// so read-check-write sequences are serialized across connections. The
    /// connection's busy timeout applies to each try; a lock that is still
    /// busy after `max_write_attempts` tries is returned as an error.
    pub(crate) async fn begin_write(&self) -> MutationErrorResult<Transaction<'static, Sqlite>> {
        let attempts = self.mutation.max_write_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.pool.begin_with("BEGIN IMMEDIATE").await {
                Ok(tx) => return Ok(tx),
                Err(e) if attempt < attempts && is_busy(&e) => {
                    warn!("Write lock busy (attempt {attempt}/{attempts}): {e}");
                    tokio::time::sleep(BUSY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn is_busy(error: &sqlx::Error) -> bool {
    let sqlx::Error::Database(db) = error else {
        return false;
    };
    db.code()
        .and_then(|code| code.parse::<i32>().ok())
        .is_some_and(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
}

pub(crate) fn log_prefix(actor: &Actor) -> String {
    format!("[actor={} role={}]", actor.id, actor.role)
}
