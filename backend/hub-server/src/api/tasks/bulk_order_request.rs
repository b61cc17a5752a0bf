use hub_mutation::BulkOrderItem;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BulkOrderRequest {
    pub items: Vec<BulkOrderItem>,
}
