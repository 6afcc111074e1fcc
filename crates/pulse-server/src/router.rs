use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Create the application router: the root health check and nothing else.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::health))
        // CORS: allow any origin (the view may be served from elsewhere)
        .layer(CorsLayer::permissive())
}
