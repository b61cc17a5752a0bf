use hub_core::ActivityLogEntry;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub entries: Vec<ActivityLogEntry>,
}
