//! Version-guarded writes shared by projects and tasks.
//!
//! Each mutation reads the current row, evaluates the caller's expected
//! version, merges the change and issues a conditional `UPDATE ... WHERE
//! version = ?`, all inside one write-locked transaction. Concurrent
//! mutations of the same row therefore run one after another: the first
//! guarded caller wins, the rest see its version and get a conflict, and
//! callers without an expected version always land on the latest state.

use crate::context::log_prefix;
use crate::{MutationContext, MutationError, Result as MutationErrorResult, require_admin};

use hub_core::{
    ActivityLogEntry, Actor, EntityType, FieldChanges, GuardDecision, MutationOutcome, Project,
    Task, VersionConflict, VersionGuard, Versioned, clock,
};
use hub_db::{ProjectRepository, Result as DbErrorResult, TaskRepository};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Storage operations the guarded write loop needs from a versioned entity.
#[async_trait]
pub trait VersionedStore: Versioned + Clone + Send + Sync + 'static {
    const ENTITY: EntityType;

    async fn load(conn: &mut SqliteConnection, id: Uuid) -> DbErrorResult<Option<Self>>;

    async fn write_if_version(
        conn: &mut SqliteConnection,
        record: &Self,
        expected_version: i32,
    ) -> DbErrorResult<bool>;

    async fn soft_delete_if_version(
        conn: &mut SqliteConnection,
        id: Uuid,
        expected_version: i32,
        actor_id: Uuid,
        at: DateTime<Utc>,
    ) -> DbErrorResult<bool>;

    async fn restore_if_version(
        conn: &mut SqliteConnection,
        id: Uuid,
        expected_version: i32,
        actor_id: Uuid,
        at: DateTime<Utc>,
    ) -> DbErrorResult<bool>;

    /// Record who touched the entity and when.
    fn stamp(&mut self, actor_id: Uuid, at: DateTime<Utc>);

    fn set_version(&mut self, version: i32);
}

#[async_trait]
impl VersionedStore for Project {
    const ENTITY: EntityType = EntityType::Project;

    async fn load(conn: &mut SqliteConnection, id: Uuid) -> DbErrorResult<Option<Self>> {
        ProjectRepository::find_by_id(conn, id).await
    }

    async fn write_if_version(
        conn: &mut SqliteConnection,
        record: &Self,
        expected_version: i32,
    ) -> DbErrorResult<bool> {
        ProjectRepository::update_if_version(conn, record, expected_version).await
    }

    async fn soft_delete_if_version(
        conn: &mut SqliteConnection,
        id: Uuid,
        expected_version: i32,
        actor_id: Uuid,
        at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        ProjectRepository::soft_delete_if_version(conn, id, expected_version, actor_id, at).await
    }

    async fn restore_if_version(
        conn: &mut SqliteConnection,
        id: Uuid,
        expected_version: i32,
        actor_id: Uuid,
        at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        ProjectRepository::restore_if_version(conn, id, expected_version, actor_id, at).await
    }

    fn stamp(&mut self, actor_id: Uuid, at: DateTime<Utc>) {
        self.updated_by = actor_id;
        self.updated_at = at;
    }

    fn set_version(&mut self, version: i32) {
        self.version = version;
    }
}

#[async_trait]
impl VersionedStore for Task {
    const ENTITY: EntityType = EntityType::Task;

    async fn load(conn: &mut SqliteConnection, id: Uuid) -> DbErrorResult<Option<Self>> {
        TaskRepository::find_by_id(conn, id).await
    }

    async fn write_if_version(
        conn: &mut SqliteConnection,
        record: &Self,
        expected_version: i32,
    ) -> DbErrorResult<bool> {
        TaskRepository::update_if_version(conn, record, expected_version).await
    }

    async fn soft_delete_if_version(
        conn: &mut SqliteConnection,
        id: Uuid,
        expected_version: i32,
        actor_id: Uuid,
        at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        TaskRepository::soft_delete_if_version(conn, id, expected_version, actor_id, at).await
    }

    async fn restore_if_version(
        conn: &mut SqliteConnection,
        id: Uuid,
        expected_version: i32,
        actor_id: Uuid,
        at: DateTime<Utc>,
    ) -> DbErrorResult<bool> {
        TaskRepository::restore_if_version(conn, id, expected_version, actor_id, at).await
    }

    fn stamp(&mut self, actor_id: Uuid, at: DateTime<Utc>) {
        self.updated_by = actor_id;
        self.updated_at = at;
    }

    fn set_version(&mut self, version: i32) {
        self.version = version;
    }
}

/// Which side of the soft-delete boundary an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Live,
    Deleted,
}

/// Apply `apply` to the live entity `id` under the version guard.
pub(crate) async fn guarded_update<T, F>(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
    apply: F,
) -> MutationErrorResult<MutationOutcome<T>>
where
    T: VersionedStore,
    F: FnOnce(&mut T) -> MutationErrorResult<FieldChanges> + Send,
{
    let prefix = log_prefix(actor);
    let mut tx = ctx.begin_write().await?;

    let current = load_in::<T>(&mut tx, id, Lifecycle::Live).await?;
    if let Some(conflict) = check_guard(&prefix, expected_version, &current) {
        return Ok(conflict);
    }

    let mut updated = current.clone();
    let changes = apply(&mut updated)?;
    updated.stamp(actor.id, clock::now());

    if !T::write_if_version(&mut tx, &updated, current.version()).await? {
        return Err(changed_under_lock::<T>(id));
    }
    tx.commit().await?;
    updated.set_version(current.version() + 1);

    info!(
        "{prefix} Updated {} {id} ({} field(s), version {})",
        T::ENTITY,
        changes.len(),
        updated.version()
    );
    ctx.recorder
        .record(ActivityLogEntry::updated(actor.id, T::ENTITY, id, changes))
        .await;

    Ok(MutationOutcome::Applied(updated))
}

/// Soft-delete the live entity `id` under the version guard.
pub(crate) async fn guarded_soft_delete<T: VersionedStore>(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
) -> MutationErrorResult<MutationOutcome<T>> {
    let prefix = log_prefix(actor);
    let mut tx = ctx.begin_write().await?;

    let current = load_in::<T>(&mut tx, id, Lifecycle::Live).await?;
    if let Some(conflict) = check_guard(&prefix, expected_version, &current) {
        return Ok(conflict);
    }

    let written =
        T::soft_delete_if_version(&mut tx, id, current.version(), actor.id, clock::now()).await?;
    if !written {
        return Err(changed_under_lock::<T>(id));
    }
    let deleted = reload::<T>(&mut tx, id).await?;
    tx.commit().await?;

    info!("{prefix} Deleted {} {id}", T::ENTITY);
    ctx.recorder
        .record(ActivityLogEntry::deleted(actor.id, T::ENTITY, id))
        .await;

    Ok(MutationOutcome::Applied(deleted))
}

/// Bring back the soft-deleted entity `id`. Admin only.
pub(crate) async fn guarded_restore<T: VersionedStore>(
    ctx: &MutationContext,
    actor: &Actor,
    id: Uuid,
    expected_version: Option<i32>,
) -> MutationErrorResult<MutationOutcome<T>> {
    require_admin(actor, &format!("restore a {}", T::ENTITY))?;

    let prefix = log_prefix(actor);
    let mut tx = ctx.begin_write().await?;

    let current = load_in::<T>(&mut tx, id, Lifecycle::Deleted).await?;
    if let Some(conflict) = check_guard(&prefix, expected_version, &current) {
        return Ok(conflict);
    }

    let written =
        T::restore_if_version(&mut tx, id, current.version(), actor.id, clock::now()).await?;
    if !written {
        return Err(changed_under_lock::<T>(id));
    }
    let restored = reload::<T>(&mut tx, id).await?;
    tx.commit().await?;

    info!("{prefix} Restored {} {id}", T::ENTITY);
    ctx.recorder
        .record(ActivityLogEntry::restored(actor.id, T::ENTITY, id))
        .await;

    Ok(MutationOutcome::Applied(restored))
}

/// Load `id` and require it to be on the `lifecycle` side of soft delete.
async fn load_in<T: VersionedStore>(
    conn: &mut SqliteConnection,
    id: Uuid,
    lifecycle: Lifecycle,
) -> MutationErrorResult<T> {
    let record = T::load(conn, id)
        .await?
        .ok_or_else(|| MutationError::not_found(T::ENTITY, id))?;

    match (lifecycle, record.is_deleted()) {
        (Lifecycle::Live, true) => Err(MutationError::not_found(T::ENTITY, id)),
        (Lifecycle::Deleted, false) => Err(MutationError::validation(
            "id",
            format!("{} {id} is not deleted", T::ENTITY),
        )),
        _ => Ok(record),
    }
}

async fn reload<T: VersionedStore>(
    conn: &mut SqliteConnection,
    id: Uuid,
) -> MutationErrorResult<T> {
    T::load(conn, id)
        .await?
        .ok_or_else(|| MutationError::not_found(T::ENTITY, id))
}

fn check_guard<T: VersionedStore>(
    prefix: &str,
    expected_version: Option<i32>,
    current: &T,
) -> Option<MutationOutcome<T>> {
    match VersionGuard::evaluate_record(expected_version, current) {
        GuardDecision::Conflict {
            expected,
            current_version,
        } => {
            warn!(
                "{prefix} Version conflict on {} {}: expected {expected}, current {current_version}",
                T::ENTITY,
                current.id()
            );
            Some(MutationOutcome::Conflict(VersionConflict::from_current(
                current.clone(),
            )))
        }
        GuardDecision::Passed | GuardDecision::Bypassed => None,
    }
}

/// The row moved although this transaction holds the write lock.
fn changed_under_lock<T: VersionedStore>(id: Uuid) -> MutationError {
    MutationError::internal(format!(
        "{} {id} changed while the write lock was held",
        T::ENTITY
    ))
}
