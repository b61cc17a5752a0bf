use crate::{TaskPriority, Versioned, clock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,

    // Core fields
    pub title: String,
    pub description: Option<String>,

    // Workflow
    pub status: String,
    pub priority: TaskPriority,

    // Assignment
    pub assignee_id: Option<Uuid>,
    pub due_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,

    // Kanban placement within (project_id, status)
    pub order_index: i32,

    // Audit
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(project_id: Uuid, title: String, status: String, created_by: Uuid) -> Self {
        let now = clock::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            description: None,
            status,
            priority: TaskPriority::None,
            assignee_id: None,
            due_date: None,
            tags: Vec::new(),
            order_index: 0,
            version: 1,
            created_at: now,
            updated_at: now,
            created_by,
            updated_by: created_by,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Versioned for Task {
    fn id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
