// src/handlers/inventory.rs
use axum::{extract::State, Extension, Json};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dtos::inventory::{
    AdjustStockRequest, SetStockRequest, ShopStatusResponse, StockResponse,
};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::inventory::InventoryCounter;
use crate::state::AppState;

async fn fetch_counter(state: &AppState) -> Result<InventoryCounter, AppError> {
    sqlx::query_as::<_, InventoryCounter>(
        "SELECT item_name, stock_count FROM inventory WHERE item_name = $1",
    )
    .bind(&state.config.stock_item)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Inventory counter not found"))
}

// GET /inventory - the storefront stock counter polls this
#[instrument(skip(state))]
pub async fn get_stock(State(state): State<AppState>) -> Result<Json<StockResponse>, AppError> {
    let counter = fetch_counter(&state).await?;
    Ok(Json(StockResponse::from(counter)))
}

// GET /shop - open/locked state plus remaining stock for the landing page
#[instrument(skip(state))]
pub async fn shop_status(
    State(state): State<AppState>,
) -> Result<Json<ShopStatusResponse>, AppError> {
    let counter = fetch_counter(&state).await?;
    let opens_at = state.config.preorder_opens_at;
    let open = opens_at.map(|t| Utc::now() >= t).unwrap_or(true);
    Ok(Json(ShopStatusResponse {
        open,
        opens_at,
        stock_count: counter.stock_count,
    }))
}

// PUT /inventory - absolute set when a batch is provisioned
#[instrument(skip(state, auth))]
pub async fn set_stock(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<SetStockRequest>,
) -> Result<Json<StockResponse>, AppError> {
    if req.stock_count < 0 {
        return Err(AppError::validation(
            "stock_count",
            "Stock cannot be negative",
        ));
    }

    let counter = sqlx::query_as::<_, InventoryCounter>(
        "INSERT INTO inventory (item_name, stock_count) VALUES ($1, $2)
         ON CONFLICT (item_name) DO UPDATE SET stock_count = EXCLUDED.stock_count
         RETURNING item_name, stock_count",
    )
    .bind(&state.config.stock_item)
    .bind(req.stock_count)
    .fetch_one(&state.db_pool)
    .await?;

    info!(operator = %auth.email, stock = counter.stock_count, "Stock counter set");

    Ok(Json(StockResponse::from(counter)))
}

// PATCH /inventory/adjust - relative change via the same conditional-update
// discipline as order intake; a decrement past zero affects no rows.
#[instrument(skip(state, auth))]
pub async fn adjust_stock(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<AdjustStockRequest>,
) -> Result<Json<StockResponse>, AppError> {
    if req.delta == 0 {
        return Err(AppError::validation("delta", "Adjustment delta cannot be 0"));
    }

    let counter = sqlx::query_as::<_, InventoryCounter>(
        "UPDATE inventory SET stock_count = stock_count + $1
         WHERE item_name = $2 AND stock_count + $1 >= 0
         RETURNING item_name, stock_count",
    )
    .bind(req.delta)
    .bind(&state.config.stock_item)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::conflict("Stock cannot go below zero"))?;

    info!(operator = %auth.email, delta = req.delta, stock = counter.stock_count, "Stock counter adjusted");

    Ok(Json(StockResponse::from(counter)))
}
