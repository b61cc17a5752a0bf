//! Project entity - owns the kanban columns its tasks move through.

use crate::{CoreError, Result as CoreErrorResult, Versioned, clock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_STATUSES: &[&str] = &["Backlog", "Ready", "In Progress", "Review", "Done"];
pub const DEFAULT_PRIORITIES: &[&str] = &["Urgent", "High", "Medium", "Low"];
pub const DEFAULT_PROJECT_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub client_name: Option<String>,
    /// Free-form lifecycle label ("active", "on_hold", ...)
    pub status: String,
    /// Ordered kanban columns. Never empty.
    pub statuses: Vec<String>,
    pub priorities: Vec<String>,
    pub tags: Vec<String>,
    /// Optimistic locking version
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_by: Uuid,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Create a new project with the default column layout
    pub fn new(name: String, created_by: Uuid) -> Self {
        let now = clock::now();
        Self {
            id: Uuid::new_v4(),
            name,
            client_name: None,
            status: DEFAULT_PROJECT_STATUS.to_string(),
            statuses: DEFAULT_STATUSES.iter().map(|s| s.to_string()).collect(),
            priorities: DEFAULT_PRIORITIES.iter().map(|s| s.to_string()).collect(),
            tags: Vec::new(),
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

    pub fn has_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s == status)
    }

    /// Column new tasks land in when the caller does not pick one
    pub fn first_status(&self) -> Option<&str> {
        self.statuses.first().map(String::as_str)
    }
}

impl Versioned for Project {
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

/// Trim and check a kanban column list: at least one entry, no blanks, no duplicates.
#[track_caller]
pub fn normalize_statuses(statuses: &[String]) -> CoreErrorResult<Vec<String>> {
    if statuses.is_empty() {
        return Err(CoreError::field(
            "statuses",
            "A project needs at least one status",
        ));
    }

    let mut normalized: Vec<String> = Vec::with_capacity(statuses.len());
    for status in statuses {
        let trimmed = status.trim();
        if trimmed.is_empty() {
            return Err(CoreError::field("statuses", "Status names cannot be blank"));
        }
        if normalized.iter().any(|s| s == trimmed) {
            return Err(CoreError::field(
                "statuses",
                format!("Duplicate status: {trimmed}"),
            ));
        }
        normalized.push(trimmed.to_string());
    }

    Ok(normalized)
}
