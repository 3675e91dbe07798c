pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::hbdi::handlers;
use crate::state::AppState;

/// Builds the full application router, CORS and request tracing included.
/// CORS is fully permissive; preflights are answered by the layer and never reach a handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate_hbdi_json",
            post(handlers::handle_generate_hbdi_json),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
