//! Catalog service: upstream client + popular-materials cache.
//!
//! This is where the three lookup flows live:
//!
//! 1. Popular aggregate — cached for one hour, partial-failure tolerant
//! 2. Search — formula first, element-list fallback, never cached
//! 3. Single lookup — by provider identifier, not-found aware

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use matex_cache::PopularCache;
use matex_core::constants::{DEFAULT_CACHE_TTL_SECONDS, MIN_QUERY_LENGTH, POPULAR_FORMULAS};
use matex_core::error::{MatexError, Result};
use matex_core::project::project_material;
use matex_core::types::ProjectedMaterial;

use crate::client::{MpClient, MpConfig};

/// Catalog configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Upstream client configuration
    pub mp: MpConfig,
    /// Whether to cache the popular-materials aggregate
    pub enable_cache: bool,
    /// Cache TTL in seconds
    pub cache_ttl_seconds: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            mp: MpConfig::default(),
            enable_cache: true,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }
}

impl CatalogConfig {
    /// Creates a config with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            mp: MpConfig::new(api_key),
            ..Default::default()
        }
    }

    /// Disables the popular-materials cache.
    pub fn no_cache(mut self) -> Self {
        self.enable_cache = false;
        self
    }
}

/// Result of the popular-materials aggregate, with its cache provenance.
#[derive(Clone, Debug)]
pub struct PopularMaterials {
    /// Projected records, in fixed formula-list order.
    pub materials: Vec<ProjectedMaterial>,
    /// True when the list was served from the cache slot.
    pub cached: bool,
}

/// Catalog over the Materials Project summary endpoint.
pub struct MaterialsCatalog {
    client: MpClient,
    popular_cache: Option<PopularCache>,
}

impl MaterialsCatalog {
    /// Creates a catalog with the given API key and default configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(CatalogConfig::with_api_key(api_key))
    }

    /// Creates a catalog with custom configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        let client = MpClient::with_config(config.mp.clone());

        let popular_cache = config.enable_cache.then(|| {
            PopularCache::with_ttl(Duration::from_secs(config.cache_ttl_seconds))
        });

        Self {
            client,
            popular_cache,
        }
    }

    /// Returns the popular-materials list for the homepage.
    ///
    /// Within the TTL window the cached aggregate is returned without any
    /// upstream call. On a miss, each formula in the fixed list is fetched
    /// once; a formula whose lookup fails or returns nothing is skipped,
    /// never aborting the batch. The freshly built list then overwrites the
    /// cache slot.
    #[instrument(skip(self))]
    pub async fn popular(&self) -> Result<PopularMaterials> {
        if let Some(cache) = &self.popular_cache {
            if let Some(materials) = cache.get() {
                debug!(count = materials.len(), "Popular materials cache hit");
                return Ok(PopularMaterials {
                    materials,
                    cached: true,
                });
            }
        }

        debug!("Popular materials cache miss, fetching");
        self.client.ensure_configured()?;

        let mut materials = Vec::with_capacity(POPULAR_FORMULAS.len());
        for &formula in POPULAR_FORMULAS {
            match self.client.search_by_formula(formula, Some(1)).await {
                Ok(docs) => {
                    if let Some(doc) = docs.first() {
                        materials.push(project_material(doc));
                    }
                }
                Err(e) => {
                    warn!(formula, error = %e, "Skipping formula after upstream fault");
                }
            }
        }

        if let Some(cache) = &self.popular_cache {
            cache.store(materials.clone());
        }

        info!(count = materials.len(), "Refreshed popular materials");
        Ok(PopularMaterials {
            materials,
            cached: false,
        })
    }

    /// Searches materials by free-text query.
    ///
    /// The query is tried as a formula first; if that call faults, it is
    /// re-interpreted as a comma/whitespace-separated element list; if that
    /// faults too, the result is empty. Results are truncated to `limit`
    /// after the fetch. No caching.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<ProjectedMaterial>> {
        let query = query.trim();
        if query.len() < MIN_QUERY_LENGTH {
            return Err(MatexError::ValidationError(format!(
                "Query must be at least {MIN_QUERY_LENGTH} characters long"
            )));
        }

        self.client.ensure_configured()?;

        let docs = match self.client.search_by_formula(query, None).await {
            Ok(docs) => docs,
            Err(e) => {
                warn!(query, error = %e, "Formula search faulted, trying elements");
                let elements: Vec<String> = query
                    .replace(',', " ")
                    .split_whitespace()
                    .map(str::to_owned)
                    .collect();
                match self.client.search_by_elements(&elements, None).await {
                    Ok(docs) => docs,
                    Err(e) => {
                        warn!(query, error = %e, "Element search faulted, returning empty");
                        Vec::new()
                    }
                }
            }
        };

        let materials: Vec<ProjectedMaterial> = docs
            .iter()
            .take(limit)
            .map(project_material)
            .collect();

        debug!(query, count = materials.len(), "Search complete");
        Ok(materials)
    }

    /// Looks up one material by provider identifier.
    #[instrument(skip(self))]
    pub async fn get(&self, material_id: &str) -> Result<ProjectedMaterial> {
        self.client.ensure_configured()?;

        let docs = self.client.search_by_id(material_id).await?;

        docs.first()
            .map(project_material)
            .ok_or_else(|| MatexError::MaterialNotFound(material_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_catalog(server: &MockServer, ttl_seconds: u64) -> MaterialsCatalog {
        let config = CatalogConfig {
            mp: MpConfig::new("test-key").with_base_url(server.uri()),
            enable_cache: true,
            cache_ttl_seconds: ttl_seconds,
        };
        MaterialsCatalog::with_config(config)
    }

    fn summary_body(ids: &[&str]) -> serde_json::Value {
        json!({
            "data": ids
                .iter()
                .map(|id| json!({"material_id": id, "formula_pretty": "X"}))
                .collect::<Vec<_>>()
        })
    }

    async fn mount_formula(server: &MockServer, formula: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/materials/summary/"))
            .and(query_param("formula", formula))
            .respond_with(response)
            .mount(server)
            .await;
    }

    async fn mount_popular_fixtures(server: &MockServer) {
        // Si and NaCl resolve, GaAs faults upstream, the rest are empty.
        mount_formula(
            server,
            "Si",
            ResponseTemplate::new(200).set_body_json(summary_body(&["mp-149"])),
        )
        .await;
        mount_formula(server, "GaAs", ResponseTemplate::new(500)).await;
        mount_formula(
            server,
            "NaCl",
            ResponseTemplate::new(200).set_body_json(summary_body(&["mp-22862"])),
        )
        .await;
        for formula in ["Fe2O3", "TiO2", "Al2O3", "MgO", "CaF2"] {
            mount_formula(
                server,
                formula,
                ResponseTemplate::new(200).set_body_json(summary_body(&[])),
            )
            .await;
        }
    }

    #[tokio::test]
    async fn test_popular_skips_faulted_formulas_in_order() {
        let server = MockServer::start().await;
        mount_popular_fixtures(&server).await;

        let catalog = test_catalog(&server, 3600);
        let result = catalog.popular().await.unwrap();

        assert!(!result.cached);
        let ids: Vec<_> = result
            .materials
            .iter()
            .map(|m| m.material_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["mp-149", "mp-22862"]);
    }

    #[tokio::test]
    async fn test_popular_second_call_is_cached() {
        let server = MockServer::start().await;
        mount_popular_fixtures(&server).await;

        let catalog = test_catalog(&server, 3600);
        let first = catalog.popular().await.unwrap();
        let requests_after_first = server.received_requests().await.unwrap().len();

        let second = catalog.popular().await.unwrap();
        let requests_after_second = server.received_requests().await.unwrap().len();

        assert!(!first.cached);
        assert!(second.cached);
        assert_eq!(first.materials, second.materials);
        // The cache hit made no upstream calls.
        assert_eq!(requests_after_first, requests_after_second);
    }

    #[tokio::test]
    async fn test_popular_refetches_after_ttl() {
        let server = MockServer::start().await;
        mount_popular_fixtures(&server).await;

        let catalog = test_catalog(&server, 0);
        let first = catalog.popular().await.unwrap();
        let second = catalog.popular().await.unwrap();

        assert!(!first.cached);
        assert!(!second.cached);
    }

    #[tokio::test]
    async fn test_search_sends_api_key_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/materials/summary/"))
            .and(header("X-API-KEY", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(summary_body(&["mp-149"])))
            .expect(1)
            .mount(&server)
            .await;

        let catalog = test_catalog(&server, 3600);
        let materials = catalog.search("Si", 10).await.unwrap();
        assert_eq!(materials.len(), 1);
    }

    #[tokio::test]
    async fn test_search_rejects_short_query_without_upstream_call() {
        let server = MockServer::start().await;
        // No mocks mounted: an upstream call would 404 and show up in the
        // received-request log.
        let catalog = test_catalog(&server, 3600);

        let err = catalog.search("a", 10).await.unwrap_err();
        assert!(err.is_validation_error());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_falls_back_to_elements() {
        let server = MockServer::start().await;
        mount_formula(&server, "Ga, As", ResponseTemplate::new(500)).await;
        Mock::given(method("GET"))
            .and(path("/materials/summary/"))
            .and(query_param("elements", "Ga,As"))
            .respond_with(ResponseTemplate::new(200).set_body_json(summary_body(&["mp-2534"])))
            .mount(&server)
            .await;

        let catalog = test_catalog(&server, 3600);
        let materials = catalog.search("Ga, As", 10).await.unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].material_id.as_deref(), Some("mp-2534"));
    }

    #[tokio::test]
    async fn test_search_double_fault_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/materials/summary/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let catalog = test_catalog(&server, 3600);
        let materials = catalog.search("SiO2", 10).await.unwrap();
        assert!(materials.is_empty());
    }

    #[tokio::test]
    async fn test_search_truncates_to_limit() {
        let server = MockServer::start().await;
        mount_formula(
            &server,
            "Si",
            ResponseTemplate::new(200)
                .set_body_json(summary_body(&["mp-1", "mp-2", "mp-3", "mp-4"])),
        )
        .await;

        let catalog = test_catalog(&server, 3600);
        let materials = catalog.search("Si", 2).await.unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].material_id.as_deref(), Some("mp-1"));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/materials/summary/"))
            .and(query_param("material_ids", "mp-0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(summary_body(&[])))
            .mount(&server)
            .await;

        let catalog = test_catalog(&server, 3600);
        let err = catalog.get("mp-0").await.unwrap_err();
        assert!(matches!(err, MatexError::MaterialNotFound(id) if id == "mp-0"));
    }

    #[tokio::test]
    async fn test_get_projects_first_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/materials/summary/"))
            .and(query_param("material_ids", "mp-149"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "material_id": "mp-149",
                    "formula_pretty": "Si",
                    "symmetry": {"crystal_system": "Cubic", "symbol": "Fd-3m"},
                    "not_requested": true
                }]
            })))
            .mount(&server)
            .await;

        let catalog = test_catalog(&server, 3600);
        let material = catalog.get("mp-149").await.unwrap();
        assert_eq!(material.formula_pretty.as_deref(), Some("Si"));
        assert_eq!(material.crystal_system.as_deref(), Some("Cubic"));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_config_error() {
        let server = MockServer::start().await;
        let config = CatalogConfig {
            mp: MpConfig::default().with_base_url(server.uri()),
            enable_cache: true,
            cache_ttl_seconds: 3600,
        };
        let catalog = MaterialsCatalog::with_config(config);

        assert!(matches!(
            catalog.popular().await.unwrap_err(),
            MatexError::ConfigError(_)
        ));
        assert!(matches!(
            catalog.get("mp-149").await.unwrap_err(),
            MatexError::ConfigError(_)
        ));
    }
}
