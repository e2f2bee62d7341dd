//! Materials Project summary-endpoint client.
//!
//! All queries go through `GET {base}/materials/summary/` with the
//! essential field set requested via `_fields`, so the provider applies the
//! projection server-side. Authentication is an `X-API-KEY` header.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use matex_core::constants::REQUESTED_FIELDS;
use matex_core::error::{MatexError, Result};
use matex_core::types::RawMaterialRecord;

/// Default Materials Project API base URL.
const DEFAULT_MP_API_URL: &str = "https://api.materialsproject.org";

/// How much upstream error body to keep when reporting a status failure.
const ERROR_BODY_LIMIT: usize = 256;

/// Materials Project client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MpConfig {
    /// API key for the `X-API-KEY` header. Requests fail with a
    /// configuration error when this is unset.
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for MpConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_MP_API_URL.into(),
            timeout_seconds: 30,
        }
    }
}

impl MpConfig {
    /// Creates a configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Envelope around summary search results.
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    data: Vec<RawMaterialRecord>,
}

/// Client for the Materials Project summary endpoint.
pub struct MpClient {
    config: MpConfig,
    http_client: reqwest::Client,
}

impl MpClient {
    /// Creates a client with the given API key and default configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(MpConfig::new(api_key))
    }

    /// Creates a client with custom configuration.
    pub fn with_config(config: MpConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// Fails when no API key is configured. Called before any upstream
    /// request so misconfiguration surfaces as one uniform error rather
    /// than a per-call auth failure.
    pub fn ensure_configured(&self) -> Result<()> {
        if self.config.api_key.is_none() {
            return Err(MatexError::ConfigError(
                "Materials Project API key not configured (set MP_API_KEY)".into(),
            ));
        }
        Ok(())
    }

    /// Searches summaries by chemical formula, e.g. "Fe2O3".
    #[instrument(skip(self))]
    pub async fn search_by_formula(
        &self,
        formula: &str,
        limit: Option<usize>,
    ) -> Result<Vec<RawMaterialRecord>> {
        self.summary_search(("formula", formula.to_string()), limit)
            .await
    }

    /// Searches summaries by element set, e.g. `["Ga", "As"]`.
    #[instrument(skip(self))]
    pub async fn search_by_elements(
        &self,
        elements: &[String],
        limit: Option<usize>,
    ) -> Result<Vec<RawMaterialRecord>> {
        self.summary_search(("elements", elements.join(",")), limit)
            .await
    }

    /// Looks up a single material by provider identifier, e.g. "mp-149".
    #[instrument(skip(self))]
    pub async fn search_by_id(&self, material_id: &str) -> Result<Vec<RawMaterialRecord>> {
        self.summary_search(("material_ids", material_id.to_string()), None)
            .await
    }

    async fn summary_search(
        &self,
        criterion: (&str, String),
        limit: Option<usize>,
    ) -> Result<Vec<RawMaterialRecord>> {
        self.ensure_configured()?;
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        let url = format!("{}/materials/summary/", self.config.base_url);

        let mut query: Vec<(&str, String)> = vec![
            criterion,
            ("_fields", REQUESTED_FIELDS.join(",")),
        ];
        if let Some(n) = limit {
            query.push(("_limit", n.to_string()));
        }

        let response = self
            .http_client
            .get(&url)
            .header("X-API-KEY", api_key)
            .query(&query)
            .send()
            .await
            .map_err(|e| MatexError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MatexError::UpstreamStatus {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let summary: SummaryResponse = response
            .json()
            .await
            .map_err(|e| MatexError::HttpError(e.to_string()))?;

        debug!(count = summary.data.len(), "Summary search returned");
        Ok(summary.data)
    }
}
