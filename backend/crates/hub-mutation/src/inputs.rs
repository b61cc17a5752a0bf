use hub_core::{EntityType, TaskPriority};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    /// Kanban columns; the default set when omitted
    #[serde(default)]
    pub statuses: Option<Vec<String>>,
    #[serde(default)]
    pub priorities: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub project_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Column to create the task in; the project's first column when omitted
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub assignee_id: Option<Uuid>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Explicit position; appended to the column when omitted
    #[serde(default)]
    pub order_index: Option<i32>,
}

impl NewTask {
    pub fn new(project_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            status: None,
            priority: None,
            assignee_id: None,
            due_date: None,
            tags: None,
            order_index: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub task_id: Uuid,
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskQuery {
    pub project_id: Option<Uuid>,
    pub status: Option<String>,
    pub assignee_id: Option<Uuid>,
    pub priority: Option<TaskPriority>,
    pub due_before: Option<DateTime<Utc>>,
    /// Restrict to tasks assigned to the caller
    #[serde(default)]
    pub my_tasks: bool,
    #[serde(default)]
    pub include_deleted: bool,
}

/// Final order of one kanban column after a drag-and-drop.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    pub project_id: Uuid,
    pub status: String,
    pub ordered_task_ids: Vec<Uuid>,
    pub moved_task_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkOrderItem {
    pub id: Uuid,
    pub status: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityQuery {
    pub entity_type: Option<EntityType>,
    pub entity_id: Option<Uuid>,
    pub limit: Option<i64>,
}
