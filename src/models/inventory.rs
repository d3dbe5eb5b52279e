use sqlx::FromRow;

/// The one contended record in the system: a named counter of pieces left.
#[derive(Debug, Clone, FromRow)]
pub struct InventoryCounter {
    pub item_name: String,
    pub stock_count: i32,
}
