use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{export, order};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    // Customers submit orders; everything else is the admin dashboard.
    let open = Router::new().route("/orders", post(order::create_order));

    let admin = Router::new()
        .route("/orders", get(order::list_orders))
        .route("/orders/summary", get(order::production_summary))
        .route("/orders/export", get(export::export_orders))
        .route(
            "/orders/{id}",
            get(order::get_order).delete(order::delete_order),
        )
        .route("/orders/{id}/status", patch(order::update_status))
        .route("/orders/{id}/paid", patch(order::update_paid))
        .route_layer(middleware::from_fn(require_auth));

    open.merge(admin)
}
