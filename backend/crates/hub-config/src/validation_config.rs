use crate::ConfigErrorResult;
use crate::error::check_range;

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

pub const MIN_CONFIGURABLE_COMMENT_LENGTH: usize = 1;
pub const MAX_CONFIGURABLE_COMMENT_LENGTH: usize = 50000;
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 5000;

pub const MIN_STATUSES: usize = 1;
pub const MAX_STATUSES: usize = 100;
pub const DEFAULT_MAX_STATUSES: usize = 20;

/// Field limits applied to incoming projects, tasks and comments.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for task titles and project names
    pub max_title_length: usize,
    /// Maximum length for task descriptions
    pub max_description_length: usize,
    /// Maximum length for comment bodies
    pub max_comment_length: usize,
    /// Maximum number of kanban columns per project
    pub max_statuses: usize,
    /// Reject task statuses that are not columns of the owning project
    pub enforce_status_membership: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
            max_statuses: DEFAULT_MAX_STATUSES,
            enforce_status_membership: false,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "validation.max_title_length",
            self.max_title_length,
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        )?;
        check_range(
            "validation.max_description_length",
            self.max_description_length,
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        )?;
        check_range(
            "validation.max_comment_length",
            self.max_comment_length,
            MIN_CONFIGURABLE_COMMENT_LENGTH,
            MAX_CONFIGURABLE_COMMENT_LENGTH,
        )?;
        check_range(
            "validation.max_statuses",
            self.max_statuses,
            MIN_STATUSES,
            MAX_STATUSES,
        )
    }
}
