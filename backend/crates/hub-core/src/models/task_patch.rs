use crate::{CoreError, FieldChangeBuilder, FieldChanges, Patch, Result as CoreErrorResult};
use crate::{Task, TaskPriority};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partial update of a task. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub title: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub status: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub priority: Patch<TaskPriority>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub assignee_id: Patch<Uuid>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub due_date: Patch<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub tags: Patch<Vec<String>>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub order_index: Patch<i32>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_missing()
            && self.description.is_missing()
            && self.status.is_missing()
            && self.priority.is_missing()
            && self.assignee_id.is_missing()
            && self.due_date.is_missing()
            && self.tags.is_missing()
            && self.order_index.is_missing()
    }

    /// Reject nulls on required fields and blank required strings.
    #[track_caller]
    pub fn validate_shape(&self) -> CoreErrorResult<()> {
        require_non_null(&self.title, "title")?;
        require_non_null(&self.status, "status")?;
        require_non_null(&self.priority, "priority")?;
        require_non_null(&self.tags, "tags")?;
        require_non_null(&self.order_index, "order_index")?;

        if let Patch::Value(title) = &self.title
            && title.trim().is_empty()
        {
            return Err(CoreError::field("title", "Title cannot be empty"));
        }
        if let Patch::Value(status) = &self.status
            && status.trim().is_empty()
        {
            return Err(CoreError::field("status", "Status cannot be empty"));
        }
        if let Patch::Value(order_index) = self.order_index
            && order_index < 0
        {
            return Err(CoreError::field(
                "order_index",
                "Order index must be non-negative",
            ));
        }

        Ok(())
    }

    /// Merge the present fields onto `task`, returning what actually changed.
    ///
    /// Absent fields are left untouched. Strings are trimmed; a blank
    /// description clears it.
    pub fn apply_to(&self, task: &mut Task) -> CoreErrorResult<FieldChanges> {
        self.validate_shape()?;

        let mut changes = FieldChangeBuilder::new();

        if let Patch::Value(title) = &self.title {
            let title = title.trim().to_string();
            changes.track("title", &task.title, &title);
            task.title = title;
        }
        if let Some(description) = self.description.clone().into_update() {
            let description = description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty());
            changes.track("description", &task.description, &description);
            task.description = description;
        }
        if let Patch::Value(status) = &self.status {
            let status = status.trim().to_string();
            changes.track("status", &task.status, &status);
            task.status = status;
        }
        if let Patch::Value(priority) = self.priority {
            changes.track("priority", &task.priority, &priority);
            task.priority = priority;
        }
        if let Some(assignee_id) = self.assignee_id.clone().into_update() {
            changes.track("assignee_id", &task.assignee_id, &assignee_id);
            task.assignee_id = assignee_id;
        }
        if let Some(due_date) = self.due_date.clone().into_update() {
            changes.track("due_date", &task.due_date, &due_date);
            task.due_date = due_date;
        }
        if let Patch::Value(tags) = &self.tags {
            changes.track("tags", &task.tags, tags);
            task.tags = tags.clone();
        }
        if let Patch::Value(order_index) = self.order_index {
            changes.track("order_index", &task.order_index, &order_index);
            task.order_index = order_index;
        }

        Ok(changes.build())
    }
}

#[track_caller]
pub(crate) fn require_non_null<T>(patch: &Patch<T>, field: &str) -> CoreErrorResult<()> {
    if patch.is_null() {
        return Err(CoreError::field(field, format!("{field} cannot be null")));
    }
    Ok(())
}
