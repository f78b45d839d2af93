pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod store;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::ItemStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

/// Builds the full router over the given storage handle. Tests pass a
/// `MemoryStore`; the binary passes `PgStore` unless `--in-memory` is set.
pub fn app(store: Arc<dyn ItemStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/version", get(handlers::health::version))
        .route(
            "/api/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route(
            "/api/items/:id",
            get(handlers::items::get_item)
                .put(handlers::items::replace_item)
                .patch(handlers::items::patch_item)
                .delete(handlers::items::delete_item),
        )
        .with_state(AppState { store })
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
