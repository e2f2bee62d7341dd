//! API route handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use matex_core::constants::DEFAULT_SEARCH_LIMIT;

use crate::dto::*;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// GET /health
pub async fn health_check(State(_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(Instant::now);

    Json(HealthResponse {
        status: "healthy".into(),
        message: "Materials API is running".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: start.elapsed().as_secs(),
    })
}

/// GET /api/materials/popular
pub async fn popular_materials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PopularMaterialsResponse>> {
    let popular = state.catalog.popular().await?;

    info!(
        count = popular.materials.len(),
        cached = popular.cached,
        "Served popular materials"
    );

    Ok(Json(PopularMaterialsResponse {
        success: true,
        count: popular.materials.len(),
        cached: popular.cached,
        data: popular.materials,
    }))
}

/// GET /api/materials/search?q=&limit=
pub async fn search_materials(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let query = params.q.unwrap_or_default().trim().to_string();
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);

    let materials = state.catalog.search(&query, limit).await?;

    info!(query = %query, count = materials.len(), "Search served");

    Ok(Json(SearchResponse {
        success: true,
        count: materials.len(),
        data: materials,
        query,
    }))
}

/// GET /api/materials/:material_id
pub async fn material_details(
    State(state): State<Arc<AppState>>,
    Path(material_id): Path<String>,
) -> Result<Json<MaterialResponse>> {
    let material = state.catalog.get(&material_id).await?;

    Ok(Json(MaterialResponse {
        success: true,
        data: material,
    }))
}
