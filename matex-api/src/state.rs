//! App state: catalog service and configuration.

use matex_core::constants::DEFAULT_CACHE_TTL_SECONDS;
use matex_mp::{CatalogConfig, MaterialsCatalog, MpConfig};

/// Server configuration, environment-driven in production.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Materials Project API key.
    pub mp_api_key: Option<String>,
    /// Override for the Materials Project base URL.
    pub mp_api_url: Option<String>,
    /// Whether the popular-materials cache is enabled.
    pub enable_cache: bool,
    /// Popular-materials cache TTL in seconds.
    pub cache_ttl_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mp_api_key: None,
            mp_api_url: None,
            enable_cache: true,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }
}

impl ApiConfig {
    /// Reads configuration from the environment (and `.env` if present).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            mp_api_key: std::env::var("MP_API_KEY").ok(),
            mp_api_url: std::env::var("MP_API_URL").ok(),
            enable_cache: std::env::var("ENABLE_CACHE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            cache_ttl_seconds: std::env::var("MATEX_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECONDS),
        }
    }
}

/// Shared state handed to every handler.
pub struct AppState {
    /// Server configuration.
    pub config: ApiConfig,
    /// Catalog over the upstream provider.
    pub catalog: MaterialsCatalog,
}

impl AppState {
    /// Builds the state, wiring the catalog from the configuration.
    pub fn new(config: ApiConfig) -> Self {
        let mut mp = MpConfig {
            api_key: config.mp_api_key.clone(),
            ..Default::default()
        };
        if let Some(url) = &config.mp_api_url {
            mp.base_url = url.clone();
        }

        let catalog_config = CatalogConfig {
            mp,
            enable_cache: config.enable_cache,
            cache_ttl_seconds: config.cache_ttl_seconds,
        };

        Self {
            config,
            catalog: MaterialsCatalog::with_config(catalog_config),
        }
    }
}
