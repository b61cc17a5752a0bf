use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// Admin only
    #[serde(default)]
    pub include_deleted: bool,
}
