//! Directory-backed tool cache
//!
//! Layout follows the runner tool cache convention:
//!
//! ```text
//! <root>/<tool>/<version>/<arch>/          install directory
//! <root>/<tool>/<version>/<arch>.complete  marker, holds the binary directory
//! ```

use std::path::PathBuf;

use tracing::debug;

/// Cache lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolKey {
    pub tool: String,
    pub version: String,
    pub arch: String,
}

impl ToolKey {
    pub fn new(tool: &str, version: &str, arch: &str) -> Self {
        Self {
            tool: tool.to_string(),
            version: version.to_string(),
            arch: arch.to_string(),
        }
    }
}

/// A previously recorded installation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedTool {
    pub dir: PathBuf,
    /// Directory holding the executables, when the install reported one
    pub bin_dir: Option<PathBuf>,
}

/// Trait for looking up and recording installed tool versions
#[async_trait::async_trait]
pub trait ToolCache: Send + Sync {
    /// Returns the recorded installation for `key`, if any
    async fn find(&self, key: &ToolKey) -> std::io::Result<Option<CachedTool>>;

    /// Records a finished installation of `key`
    async fn record(&self, key: &ToolKey, bin_dir: Option<PathBuf>) -> std::io::Result<()>;
}

/// Tool cache rooted at a directory on disk
#[derive(Debug, Clone)]
pub struct DirToolCache {
    root: PathBuf,
}

impl DirToolCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn version_dir(&self, key: &ToolKey) -> PathBuf {
        self.root.join(&key.tool).join(&key.version)
    }

    fn tool_dir(&self, key: &ToolKey) -> PathBuf {
        self.version_dir(key).join(&key.arch)
    }

    fn marker_path(&self, key: &ToolKey) -> PathBuf {
        self.version_dir(key).join(format!("{}.complete", key.arch))
    }
}

#[async_trait::async_trait]
impl ToolCache for DirToolCache {
    async fn find(&self, key: &ToolKey) -> std::io::Result<Option<CachedTool>> {
        let marker = self.marker_path(key);
        if !tokio::fs::try_exists(&marker).await? {
            debug!("No tool cache entry at {}", marker.display());
            return Ok(None);
        }

        let contents = tokio::fs::read_to_string(&marker).await?;
        let bin_dir = Some(contents.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Some(CachedTool {
            dir: self.tool_dir(key),
            bin_dir,
        }))
    }

    async fn record(&self, key: &ToolKey, bin_dir: Option<PathBuf>) -> std::io::Result<()> {
        let dir = self.tool_dir(key);
        tokio::fs::create_dir_all(&dir).await?;

        let contents = bin_dir
            .as_deref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        tokio::fs::write(self.marker_path(key), contents).await?;

        debug!("Recorded {} {} in tool cache", key.tool, key.version);
        Ok(())
    }
}
