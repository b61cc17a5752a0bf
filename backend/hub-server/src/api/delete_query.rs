use serde::Deserialize;

/// `DELETE` query string. `restore=true` undoes a soft delete (admin only).
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub restore: bool,
    #[serde(default)]
    pub expected_version: Option<i32>,
}
