//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Materials
        .route("/api/materials/popular", get(handlers::popular_materials))
        .route("/api/materials/search", get(handlers::search_materials))
        .route("/api/materials/:material_id", get(handlers::material_details))
        .with_state(state)
}
