use crate::models::project::normalize_statuses;
use crate::models::task_patch::require_non_null;
use crate::{CoreError, FieldChangeBuilder, FieldChanges, Patch, Project, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Partial update of a project. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub client_name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub status: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub statuses: Patch<Vec<String>>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub priorities: Patch<Vec<String>>,
    #[serde(skip_serializing_if = "Patch::is_missing")]
    pub tags: Patch<Vec<String>>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_missing()
            && self.client_name.is_missing()
            && self.status.is_missing()
            && self.statuses.is_missing()
            && self.priorities.is_missing()
            && self.tags.is_missing()
    }

    #[track_caller]
    pub fn validate_shape(&self) -> CoreErrorResult<()> {
        require_non_null(&self.name, "name")?;
        require_non_null(&self.status, "status")?;
        require_non_null(&self.statuses, "statuses")?;
        require_non_null(&self.priorities, "priorities")?;
        require_non_null(&self.tags, "tags")?;

        if let Patch::Value(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(CoreError::field("name", "Project name cannot be empty"));
        }
        if let Patch::Value(status) = &self.status
            && status.trim().is_empty()
        {
            return Err(CoreError::field("status", "Status cannot be empty"));
        }
        if let Patch::Value(statuses) = &self.statuses {
            normalize_statuses(statuses)?;
        }

        Ok(())
    }

    /// Merge the present fields onto `project`, returning what actually changed.
    pub fn apply_to(&self, project: &mut Project) -> CoreErrorResult<FieldChanges> {
        self.validate_shape()?;

        let mut changes = FieldChangeBuilder::new();

        if let Patch::Value(name) = &self.name {
            let name = name.trim().to_string();
            changes.track("name", &project.name, &name);
            project.name = name;
        }
        if let Some(client_name) = self.client_name.clone().into_update() {
            let client_name = client_name
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty());
            changes.track("client_name", &project.client_name, &client_name);
            project.client_name = client_name;
        }
        if let Patch::Value(status) = &self.status {
            let status = status.trim().to_string();
            changes.track("status", &project.status, &status);
            project.status = status;
        }
        if let Patch::Value(statuses) = &self.statuses {
            let statuses = normalize_statuses(statuses)?;
            changes.track("statuses", &project.statuses, &statuses);
            project.statuses = statuses;
        }
        if let Patch::Value(priorities) = &self.priorities {
            changes.track("priorities", &project.priorities, priorities);
            project.priorities = priorities.clone();
        }
        if let Patch::Value(tags) = &self.tags {
            changes.track("tags", &project.tags, tags);
            project.tags = tags.clone();
        }

        Ok(changes.build())
    }
}
