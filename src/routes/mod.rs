pub mod attachments;
pub mod inventory;
pub mod orders;
pub mod users;

use crate::state::AppState;
use axum::Router;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(orders::routes())
        .merge(inventory::routes())
        .merge(attachments::routes())
        .merge(users::routes())
}
