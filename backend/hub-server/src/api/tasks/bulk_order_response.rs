use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BulkOrderResponse {
    pub success: bool,
    pub updated: usize,
}
