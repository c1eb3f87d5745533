//! rversions.r-pkg.org version index implementation

use crate::version::catalog::VersionCatalog;
use crate::version::error::CatalogError;
use serde::Deserialize;
use tracing::{debug, warn};

/// Default base URL for the R version index
pub const DEFAULT_BASE_URL: &str = "https://rversions.r-pkg.org";

/// One record of the `/r-versions` response
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    version: String,
}

/// Catalog implementation backed by the rversions web service
pub struct RVersionsCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl RVersionsCatalog {
    /// Creates a new RVersionsCatalog with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("setup-r/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for RVersionsCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl VersionCatalog for RVersionsCatalog {
    async fn fetch_all(&self) -> Result<Vec<String>, CatalogError> {
        let url = format!("{}/r-versions", self.base_url);
        debug!("Fetching R versions from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Version index returned status {}: {}", status, url);
            return Err(CatalogError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse version index response: {}", e);
            CatalogError::InvalidResponse(e.to_string())
        })?;

        debug!("Version index returned {} entries", entries.len());

        Ok(entries.into_iter().map(|e| e.version).collect())
    }
}
