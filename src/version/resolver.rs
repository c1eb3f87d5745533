//! Version specifier resolution
//!
//! Resolves a partial specifier ("4", "4.1", "4.1.x") to the highest catalog
//! entry whose text starts with the specifier's prefix. Matching is textual:
//! "4.1" also matches "4.10.0", and "1" matches "10.2.0". Exact three-part
//! specifiers are returned untouched without fetching the catalog.

use std::collections::BTreeMap;
use std::sync::Arc;

use semver::Version;
use tracing::debug;

use crate::version::catalog::VersionCatalog;
use crate::version::error::ResolveError;
use crate::version::semver::parse_version;

/// Suffix that marks a specifier as a prefix filter
pub const WILDCARD_SUFFIX: &str = ".x";

/// Classified form of a version specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    /// Fully qualified version, used as-is
    Exact(String),
    /// Textual prefix that catalog entries must start with
    Prefix(String),
}

impl Specifier {
    /// Classify a trimmed, non-empty specifier
    pub fn classify(specifier: &str) -> Self {
        if let Some(prefix) = specifier.strip_suffix(WILDCARD_SUFFIX) {
            return Self::Prefix(prefix.to_string());
        }

        if specifier.split('.').count() >= 3 {
            Self::Exact(specifier.to_string())
        } else {
            // "4" behaves like "4.x", "4.1" like "4.1.x"
            Self::Prefix(specifier.to_string())
        }
    }
}

/// Pick the highest entry starting with `prefix`.
///
/// Entries that normalize to the same version collapse onto one key; the one
/// encountered last wins. Entries that do not parse as a version are skipped.
pub fn select_highest<I>(prefix: &str, versions: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut by_version: BTreeMap<Version, String> = BTreeMap::new();

    for original in versions.into_iter().filter(|v| v.starts_with(prefix)) {
        match parse_version(&original) {
            Some(normalized) => {
                by_version.insert(normalized, original);
            }
            None => debug!("Skipping unparseable catalog entry {:?}", original),
        }
    }

    by_version.into_values().next_back()
}

/// Resolves version specifiers against a [`VersionCatalog`]
pub struct VersionResolver {
    catalog: Arc<dyn VersionCatalog>,
}

impl VersionResolver {
    pub fn new(catalog: Arc<dyn VersionCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve `specifier` to a version that appears verbatim in the catalog,
    /// or return an exact specifier unchanged.
    pub async fn resolve(&self, specifier: &str) -> Result<String, ResolveError> {
        let trimmed = specifier.trim();
        if trimmed.is_empty() {
            return Err(ResolveError::InvalidSpecifier(specifier.to_string()));
        }

        let prefix = match Specifier::classify(trimmed) {
            Specifier::Exact(version) => {
                debug!("Specifier {} is exact, skipping version lookup", version);
                return Ok(version);
            }
            Specifier::Prefix(prefix) => prefix,
        };

        let versions = self.catalog.fetch_all().await?;
        debug!(
            "Matching prefix {:?} against {} published versions",
            prefix,
            versions.len()
        );

        select_highest(&prefix, versions)
            .ok_or_else(|| ResolveError::NoMatchingVersion(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::catalog::MockVersionCatalog;
    use crate::version::error::CatalogError;
    use rstest::rstest;

    fn catalog_returning(versions: &[&str]) -> MockVersionCatalog {
        let versions: Vec<String> = versions.iter().map(|s| s.to_string()).collect();
        let mut catalog = MockVersionCatalog::new();
        catalog
            .expect_fetch_all()
            .times(1)
            .returning(move || Ok(versions.clone()));
        catalog
    }

    #[rstest]
    #[case("4.1.3", Specifier::Exact("4.1.3".to_string()))]
    #[case("4.1.3.1", Specifier::Exact("4.1.3.1".to_string()))]
    #[case("4.1.x", Specifier::Prefix("4.1".to_string()))]
    #[case("4.x", Specifier::Prefix("4".to_string()))]
    #[case("4.1", Specifier::Prefix("4.1".to_string()))]
    #[case("4", Specifier::Prefix("4".to_string()))]
    fn classify_returns_expected(#[case] input: &str, #[case] expected: Specifier) {
        assert_eq!(Specifier::classify(input), expected);
    }

    #[rstest]
    #[case("4.1", &["4.1.3", "4.1.2", "4.10.0", "3.9.9"], Some("4.10.0"))]
    #[case("1", &["1.2.0", "1.10.0", "1.9.0"], Some("1.10.0"))]
    #[case("1", &["1.2.0", "10.2.0"], Some("10.2.0"))] // textual prefix crosses major boundary
    #[case("3.6", &["3.6", "3.6.1", "3.6.3"], Some("3.6.3"))]
    #[case("0", &["0.50-a1", "0.49"], Some("0.49"))]
    #[case("9.9", &["4.1.3", "3.6.3"], None)]
    #[case("4", &[], None)]
    fn select_highest_returns_expected(
        #[case] prefix: &str,
        #[case] versions: &[&str],
        #[case] expected: Option<&str>,
    ) {
        let versions: Vec<String> = versions.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            select_highest(prefix, versions),
            expected.map(|s| s.to_string())
        );
    }

    #[test]
    fn select_highest_keeps_last_entry_for_duplicate_normalized_versions() {
        let versions = vec!["2.0".to_string(), "2.0.0".to_string()];
        assert_eq!(select_highest("2", versions), Some("2.0.0".to_string()));

        let versions = vec!["2.0.0".to_string(), "2.0".to_string()];
        assert_eq!(select_highest("2", versions), Some("2.0".to_string()));
    }

    #[tokio::test]
    async fn resolve_returns_exact_specifier_without_fetching() {
        let mut catalog = MockVersionCatalog::new();
        catalog.expect_fetch_all().times(0);

        let resolver = VersionResolver::new(Arc::new(catalog));

        assert_eq!(resolver.resolve("4.1.3").await.unwrap(), "4.1.3");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn resolve_rejects_empty_specifier_without_fetching(#[case] specifier: &str) {
        let mut catalog = MockVersionCatalog::new();
        catalog.expect_fetch_all().times(0);

        let resolver = VersionResolver::new(Arc::new(catalog));
        let result = resolver.resolve(specifier).await;

        assert!(matches!(result, Err(ResolveError::InvalidSpecifier(_))));
    }

    #[rstest]
    #[case("4.1.x", "4.1.3")]
    #[case("4.x", "4.1.3")]
    #[case("3", "3.6.3")]
    #[case("3.5", "3.5.0")]
    #[tokio::test]
    async fn resolve_picks_highest_matching_catalog_entry(
        #[case] specifier: &str,
        #[case] expected: &str,
    ) {
        let catalog = catalog_returning(&["3.5.0", "3.6.3", "3.6.0", "4.0.5", "4.1.3", "4.1.0"]);
        let resolver = VersionResolver::new(Arc::new(catalog));

        assert_eq!(resolver.resolve(specifier).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn resolve_returns_no_matching_version_with_specifier_in_message() {
        let catalog = catalog_returning(&["4.1.3", "3.6.3"]);
        let resolver = VersionResolver::new(Arc::new(catalog));

        let err = resolver.resolve("9.9").await.unwrap_err();

        assert!(matches!(err, ResolveError::NoMatchingVersion(ref s) if s == "9.9"));
        assert!(err.to_string().contains("9.9"));
    }

    #[tokio::test]
    async fn resolve_propagates_catalog_failure() {
        let mut catalog = MockVersionCatalog::new();
        catalog
            .expect_fetch_all()
            .times(1)
            .returning(|| Err(CatalogError::InvalidResponse("boom".to_string())));

        let resolver = VersionResolver::new(Arc::new(catalog));
        let result = resolver.resolve("4.x").await;

        assert!(matches!(result, Err(ResolveError::Retrieval(_))));
    }

    #[tokio::test]
    async fn resolve_trims_surrounding_whitespace() {
        let catalog = catalog_returning(&["4.0.5", "4.1.3"]);
        let resolver = VersionResolver::new(Arc::new(catalog));

        assert_eq!(resolver.resolve(" 4.0 \n").await.unwrap(), "4.0.5");
    }
}
