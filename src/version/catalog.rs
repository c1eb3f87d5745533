//! Catalog trait for fetching published R versions

#[cfg(test)]
use mockall::automock;

use crate::version::error::CatalogError;

/// Trait for fetching the list of published versions from an upstream index
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionCatalog: Send + Sync {
    /// Fetches every published version
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Version strings in the order the index returned them
    /// * `Err(CatalogError)` - If the request fails or the body cannot be decoded
    async fn fetch_all(&self) -> Result<Vec<String>, CatalogError>;
}
