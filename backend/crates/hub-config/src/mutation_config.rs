use crate::ConfigErrorResult;
use crate::error::check_range;

use serde::Deserialize;

pub const DEFAULT_MAX_WRITE_ATTEMPTS: u32 = 3;
pub const MIN_MAX_WRITE_ATTEMPTS: u32 = 1;
pub const MAX_MAX_WRITE_ATTEMPTS: u32 = 10;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Tries at taking the database write lock when SQLite reports it busy
    pub max_write_attempts: u32,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            max_write_attempts: DEFAULT_MAX_WRITE_ATTEMPTS,
        }
    }
}

impl MutationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "mutation.max_write_attempts",
            self.max_write_attempts,
            MIN_MAX_WRITE_ATTEMPTS,
            MAX_MAX_WRITE_ATTEMPTS,
        )
    }
}
