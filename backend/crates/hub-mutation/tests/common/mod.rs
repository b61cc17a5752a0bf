#![allow(dead_code)]

use hub_config::Config;
use hub_core::{ActivityLogEntry, Actor, EntityType, Project, Task};
use hub_db::{ActivityLogRepository, Database, DatabaseOptions, DbError, Result as DbErrorResult};
use hub_mutation::{ActivityRecorder, ActivitySink, MutationContext, NewProject, NewTask};

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

pub struct TestHarness {
    pub pool: SqlitePool,
    pub ctx: MutationContext,
    pub member: Actor,
    pub admin: Actor,
    _dir: Option<TempDir>,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::with_config(Config::default()).await
    }

    pub async fn with_config(config: Config) -> Self {
        let pool = Database::connect_in_memory()
            .await
            .expect("Failed to create test pool");
        Self::assemble(pool, &config, None)
    }

    /// File-backed WAL database with a multi-connection pool, so requests
    /// really run side by side.
    pub async fn on_disk() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let pool = Database::connect(&DatabaseOptions::new(dir.path().join("hub.db")))
            .await
            .expect("Failed to open database file");

        Self::assemble(pool, &Config::default(), Some(dir))
    }

    fn assemble(pool: SqlitePool, config: &Config, dir: Option<TempDir>) -> Self {
        Self {
            ctx: MutationContext::new(pool.clone(), config),
            pool,
            member: Actor::member(Uuid::new_v4()),
            admin: Actor::admin(Uuid::new_v4()),
            _dir: dir,
        }
    }

    /// Same database, but every activity append fails
    pub fn with_failing_sink(mut self) -> Self {
        self.ctx = self
            .ctx
            .with_recorder(ActivityRecorder::new(Arc::new(FailingSink)));
        self
    }

    pub async fn project(&self, name: &str) -> Project {
        hub_mutation::project::create(
            &self.ctx,
            &self.member,
            NewProject {
                name: name.to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to create project")
    }

    pub async fn task(&self, project_id: Uuid, title: &str) -> Task {
        hub_mutation::task::create(&self.ctx, &self.member, NewTask::new(project_id, title))
            .await
            .expect("Failed to create task")
    }

    pub async fn task_in(&self, project_id: Uuid, title: &str, status: &str) -> Task {
        let mut input = NewTask::new(project_id, title);
        input.status = Some(status.to_string());
        hub_mutation::task::create(&self.ctx, &self.member, input)
            .await
            .expect("Failed to create task")
    }

    pub async fn activity_for(&self, entity_type: EntityType, id: Uuid) -> Vec<ActivityLogEntry> {
        ActivityLogRepository::find(
            &self.pool,
            &hub_db::ActivityLogQuery::for_entity(entity_type, id, 100),
        )
        .await
        .expect("Failed to read activity")
    }

    pub async fn activity_count(&self, entity_type: EntityType, id: Uuid) -> i64 {
        ActivityLogRepository::count_for_entity(&self.pool, entity_type, id)
            .await
            .expect("Failed to count activity")
    }
}

/// Activity sink that rejects every append
pub struct FailingSink;

#[async_trait]
impl ActivitySink for FailingSink {
    async fn append(&self, _entry: &ActivityLogEntry) -> DbErrorResult<()> {
        Err(DbError::from(sqlx::Error::PoolClosed))
    }
}
