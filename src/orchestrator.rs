//! Top-level setup sequence
//!
//! resolve → tool cache lookup → install (on miss) → configure environment.
//! Any failure aborts the run; nothing is retried or rolled back.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{Config, LIBRARY_PATH_VAR, TOOL_NAME};
use crate::environment::{ActionsEnvironment, EnvironmentWriter};
use crate::error::{EnvironmentError, SetupError};
use crate::install::{
    CachedTool, DirToolCache, HttpDownloader, StrategySelector, TokioCommandRunner, ToolCache,
    ToolKey,
};
use crate::version::catalogs::RVersionsCatalog;
use crate::version::resolver::VersionResolver;

pub struct InstallationOrchestrator {
    config: Config,
    resolver: VersionResolver,
    tool_cache: Arc<dyn ToolCache>,
    selector: StrategySelector,
    environment: Arc<dyn EnvironmentWriter>,
}

impl InstallationOrchestrator {
    pub fn new(
        config: Config,
        resolver: VersionResolver,
        tool_cache: Arc<dyn ToolCache>,
        selector: StrategySelector,
        environment: Arc<dyn EnvironmentWriter>,
    ) -> Self {
        Self {
            config,
            resolver,
            tool_cache,
            selector,
            environment,
        }
    }

    /// Wire the production collaborators for `config`
    pub fn from_config(config: Config) -> Self {
        let resolver = VersionResolver::new(Arc::new(RVersionsCatalog::new(&config.versions_url)));
        let tool_cache = Arc::new(DirToolCache::new(config.tool_cache_dir.clone()));
        let selector = StrategySelector::new(
            Arc::new(HttpDownloader::new()),
            Arc::new(TokioCommandRunner),
            config.temp_dir.clone(),
        );
        let environment = Arc::new(ActionsEnvironment::from_config(&config));

        Self::new(config, resolver, tool_cache, selector, environment)
    }

    /// Install the version matching `specifier` and configure the environment.
    ///
    /// Returns the resolved version.
    pub async fn run(&self, specifier: &str) -> Result<String, SetupError> {
        let version = self.resolver.resolve(specifier).await?;
        info!("Resolved R version {} from {:?}", version, specifier);

        let key = ToolKey::new(TOOL_NAME, &version, &self.config.arch);
        let bin_dir = match self.find_cached(&key).await {
            cached @ Some(_) => cached,
            None => {
                let bin_dir = self
                    .selector
                    .select_and_install(self.config.platform, &version)
                    .await?;
                // Only versioned bin directories are cached
                match &bin_dir {
                    Some(dir) => {
                        if let Err(e) = self.tool_cache.record(&key, Some(dir.clone())).await {
                            warn!("Failed to record R {} in tool cache: {}", version, e);
                        }
                    }
                    None => debug!("Not caching R {}: no versioned bin directory", version),
                }
                bin_dir
            }
        };

        self.configure_environment(bin_dir.as_deref()).await?;
        info!("R {} is ready", version);

        Ok(version)
    }

    /// Bin directory of a usable cache entry, `None` when an install is needed.
    ///
    /// Entries without a bin directory are misses.
    async fn find_cached(&self, key: &ToolKey) -> Option<PathBuf> {
        match self.tool_cache.find(key).await {
            Ok(Some(CachedTool {
                dir,
                bin_dir: Some(bin_dir),
            })) => {
                info!("Tool found in cache {}", dir.display());
                Some(bin_dir)
            }
            Ok(Some(cached)) => {
                debug!(
                    "Ignoring cache entry {} without a bin directory",
                    cached.dir.display()
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Tool cache lookup failed, installing instead: {}", e);
                None
            }
        }
    }

    async fn configure_environment(&self, bin_dir: Option<&Path>) -> Result<(), EnvironmentError> {
        let library = self.config.library_dir();
        tokio::fs::create_dir_all(&library)
            .await
            .map_err(|source| EnvironmentError::Write {
                path: library.clone(),
                source,
            })?;
        self.environment
            .export_variable(LIBRARY_PATH_VAR, &library.to_string_lossy())
            .await?;

        let profile = self
            .environment
            .write_profile(&self.config.profile_contents())
            .await?;
        debug!("Wrote R profile to {}", profile.display());

        if let Some(dir) = bin_dir {
            self.environment.add_path(dir).await?;
        }

        Ok(())
    }
}
