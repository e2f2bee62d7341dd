//! DTOs for API requests and responses.

use serde::{Deserialize, Serialize};

use matex_core::types::ProjectedMaterial;

/// Response for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" when the process is serving.
    pub status: String,
    /// Human-readable status line.
    pub message: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the first health probe.
    pub uptime_seconds: u64,
}

/// Response for the popular-materials list.
#[derive(Debug, Serialize)]
pub struct PopularMaterialsResponse {
    /// Always true on this path; failures use the error envelope.
    pub success: bool,
    /// Projected records in fixed formula-list order.
    pub data: Vec<ProjectedMaterial>,
    /// Number of records in `data`.
    pub count: usize,
    /// Whether the list came from the cache slot.
    pub cached: bool,
}

/// Query parameters for search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query: a formula, or a comma/whitespace element list.
    pub q: Option<String>,
    /// Maximum number of results to return.
    pub limit: Option<usize>,
}

/// Response for search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Always true on this path.
    pub success: bool,
    /// Projected records, truncated to the requested limit.
    pub data: Vec<ProjectedMaterial>,
    /// Number of records in `data`.
    pub count: usize,
    /// The query as received (trimmed).
    pub query: String,
}

/// Response for a single-material lookup.
#[derive(Debug, Serialize)]
pub struct MaterialResponse {
    /// Always true on this path.
    pub success: bool,
    /// The projected record.
    pub data: ProjectedMaterial,
}
