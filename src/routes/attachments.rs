use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::attachment;
use crate::middleware::auth::require_auth;
use crate::state::AppState;
use crate::storage::MAX_FILE_SIZE;

pub fn routes() -> Router<AppState> {
    // Uploads happen before the order exists, so they are open; headroom on
    // top of the store's own size cap covers multipart framing.
    let open = Router::new()
        .route("/attachments/{purpose}", post(attachment::upload_attachment))
        .layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 64 * 1024));

    let admin = Router::new()
        .route(
            "/attachments/{purpose}/{filename}",
            get(attachment::download_attachment),
        )
        .route_layer(middleware::from_fn(require_auth));

    open.merge(admin)
}
