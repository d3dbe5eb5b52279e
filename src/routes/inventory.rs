use axum::{
    middleware,
    routing::{get, patch, put},
    Router,
};

use crate::handlers::inventory;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    // Open routes - the storefront polls the counter and the landing gate
    let open = Router::new()
        .route("/inventory", get(inventory::get_stock))
        .route("/shop", get(inventory::shop_status));

    let admin = Router::new()
        .route("/inventory", put(inventory::set_stock))
        .route("/inventory/adjust", patch(inventory::adjust_stock))
        .route_layer(middleware::from_fn(require_auth));

    open.merge(admin)
}
