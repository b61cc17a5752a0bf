use crate::{MutationError, NewProject, NewTask, Result as MutationErrorResult};

use hub_config::ValidationConfig;
use hub_core::models::project::normalize_statuses;
use hub_core::{Patch, ProjectPatch, TaskPatch};

/// Config-driven field limits layered over the shape checks of the patch types.
pub struct Validator<'a> {
    config: &'a ValidationConfig,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self { config }
    }

    /// Trimmed, non-empty, at most `max_title_length` characters.
    pub fn title(&self, field: &str, value: &str) -> MutationErrorResult<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(MutationError::validation(field, format!("{field} is required")));
        }
        if trimmed.chars().count() > self.config.max_title_length {
            return Err(MutationError::validation(
                field,
                format!(
                    "{field} must be at most {} characters",
                    self.config.max_title_length
                ),
            ));
        }
        Ok(trimmed.to_string())
    }

    pub fn description(&self, value: &str) -> MutationErrorResult<()> {
        if value.trim().chars().count() > self.config.max_description_length {
            return Err(MutationError::validation(
                "description",
                format!(
                    "description must be at most {} characters",
                    self.config.max_description_length
                ),
            ));
        }
        Ok(())
    }

    pub fn comment_body(&self, body: &str) -> MutationErrorResult<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(MutationError::validation("body", "Comment body is required"));
        }
        if trimmed.chars().count() > self.config.max_comment_length {
            return Err(MutationError::validation(
                "body",
                format!(
                    "Comment must be at most {} characters",
                    self.config.max_comment_length
                ),
            ));
        }
        Ok(trimmed.to_string())
    }

    pub fn statuses(&self, statuses: &[String]) -> MutationErrorResult<Vec<String>> {
        let normalized = normalize_statuses(statuses)?;
        if normalized.len() > self.config.max_statuses {
            return Err(MutationError::validation(
                "statuses",
                format!(
                    "A project can have at most {} statuses",
                    self.config.max_statuses
                ),
            ));
        }
        Ok(normalized)
    }

    pub fn status(&self, status: &str) -> MutationErrorResult<String> {
        let trimmed = status.trim();
        if trimmed.is_empty() {
            return Err(MutationError::validation("status", "Status cannot be empty"));
        }
        Ok(trimmed.to_string())
    }

    pub fn new_project(&self, input: &NewProject) -> MutationErrorResult<()> {
        self.title("name", &input.name)?;
        if let Some(statuses) = &input.statuses {
            self.statuses(statuses)?;
        }
        Ok(())
    }

    pub fn new_task(&self, input: &NewTask) -> MutationErrorResult<()> {
        self.title("title", &input.title)?;
        if let Some(description) = &input.description {
            self.description(description)?;
        }
        if let Some(status) = &input.status {
            self.status(status)?;
        }
        if let Some(order_index) = input.order_index
            && order_index < 0
        {
            return Err(MutationError::validation(
                "order_index",
                "Order index must be non-negative",
            ));
        }
        Ok(())
    }

    pub fn project_patch(&self, patch: &ProjectPatch) -> MutationErrorResult<()> {
        patch.validate_shape()?;
        if let Patch::Value(name) = &patch.name {
            self.title("name", name)?;
        }
        if let Patch::Value(statuses) = &patch.statuses {
            self.statuses(statuses)?;
        }
        Ok(())
    }

    pub fn task_patch(&self, patch: &TaskPatch) -> MutationErrorResult<()> {
        patch.validate_shape()?;
        if let Patch::Value(title) = &patch.title {
            self.title("title", title)?;
        }
        if let Patch::Value(description) = &patch.description {
            self.description(description)?;
        }
        Ok(())
    }
}
