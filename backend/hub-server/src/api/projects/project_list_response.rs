use hub_core::Project;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}
