use hub_core::{ActivityLogEntry, Comment, EntityType, Project, Task};
use hub_db::{ProjectRepository, TaskRepository};

use chrono::Duration;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates a test Project with the default columns
pub fn create_test_project(user_id: Uuid) -> Project {
    let mut project = Project::new("Test Project".to_string(), user_id);
    project.client_name = Some("Acme".to_string());
    project
}

/// Creates a test Task in `status` at `order_index`
pub fn create_test_task(project_id: Uuid, user_id: Uuid, status: &str, order_index: i32) -> Task {
    let mut task = Task::new(
        project_id,
        "Test Task".to_string(),
        status.to_string(),
        user_id,
    );
    task.order_index = order_index;
    task
}

/// Creates a test Comment
pub fn create_test_comment(task_id: Uuid, user_id: Uuid, body: &str) -> Comment {
    Comment::new(task_id, user_id, body.to_string())
}

/// Creates a `created` entry offset from now by `offset_ms`
pub fn create_test_activity_at(entity_id: Uuid, actor_id: Uuid, offset_ms: i64) -> ActivityLogEntry {
    let mut entry = ActivityLogEntry::created(
        actor_id,
        EntityType::Task,
        entity_id,
        Some(json!({ "title": "Test Task" })),
    );
    entry.created_at += Duration::milliseconds(offset_ms);
    entry
}

/// Inserts a project and returns it
pub async fn seed_project(pool: &SqlitePool, user_id: Uuid) -> Project {
    let project = create_test_project(user_id);
    ProjectRepository::create(pool, &project)
        .await
        .expect("Failed to seed project");
    project
}

/// Inserts a task and returns it
pub async fn seed_task(
    pool: &SqlitePool,
    project_id: Uuid,
    user_id: Uuid,
    status: &str,
    order_index: i32,
) -> Task {
    let task = create_test_task(project_id, user_id, status, order_index);
    TaskRepository::create(pool, &task)
        .await
        .expect("Failed to seed task");
    task
}
