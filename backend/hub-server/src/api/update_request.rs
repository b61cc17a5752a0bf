use serde::Deserialize;

/// `PATCH` body: the fields to change plus the version the client last saw.
///
/// Omitting `expected_version` skips the conflict check (last write wins).
#[derive(Debug, Deserialize)]
pub struct UpdateRequest<P> {
    #[serde(default)]
    pub expected_version: Option<i32>,
    pub fields: P,
}
