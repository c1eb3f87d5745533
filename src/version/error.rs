use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid version specifier: {0:?}")]
    InvalidSpecifier(String),

    #[error("Failed to retrieve R versions: {0}")]
    Retrieval(#[from] CatalogError),

    #[error("No R version matches specifier {0:?}")]
    NoMatchingVersion(String),
}
