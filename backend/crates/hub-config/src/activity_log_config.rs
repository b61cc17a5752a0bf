use crate::ConfigErrorResult;
use crate::error::check_range;

use serde::Deserialize;

pub const DEFAULT_ACTIVITY_LIMIT: i64 = 50;
pub const DEFAULT_MAX_ACTIVITY_LIMIT: i64 = 100;
pub const MIN_ACTIVITY_LIMIT: i64 = 1;
pub const MAX_ACTIVITY_LIMIT: i64 = 1000;

/// Paging limits for the activity feed
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivityLogConfig {
    /// Entries returned when the caller gives no limit
    pub default_limit: i64,
    /// Larger requested limits are capped to this
    pub max_limit: i64,
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_ACTIVITY_LIMIT,
            max_limit: DEFAULT_MAX_ACTIVITY_LIMIT,
        }
    }
}

impl ActivityLogConfig {
    /// Effective page size for a requested limit.
    pub fn effective_limit(&self, requested: Option<i64>) -> i64 {
        requested
            .unwrap_or(self.default_limit)
            .clamp(MIN_ACTIVITY_LIMIT, self.max_limit)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "activity_log.max_limit",
            self.max_limit,
            MIN_ACTIVITY_LIMIT,
            MAX_ACTIVITY_LIMIT,
        )?;
        // The default has to be reachable without capping
        check_range(
            "activity_log.default_limit",
            self.default_limit,
            MIN_ACTIVITY_LIMIT,
            self.max_limit,
        )
    }
}
