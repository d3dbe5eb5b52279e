use crate::models::inventory::InventoryCounter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct StockResponse {
    pub item_name: String,
    pub stock_count: i32,
}

impl From<InventoryCounter> for StockResponse {
    fn from(counter: InventoryCounter) -> Self {
        Self {
            item_name: counter.item_name,
            stock_count: counter.stock_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetStockRequest {
    pub stock_count: i32,
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    /// Positive to add stock, negative to remove.
    pub delta: i32,
}

#[derive(Debug, Serialize)]
pub struct ShopStatusResponse {
    pub open: bool,
    pub opens_at: Option<DateTime<Utc>>,
    pub stock_count: i32,
}
