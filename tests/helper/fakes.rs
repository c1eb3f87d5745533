//! In-memory collaborators for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use setup_r::environment::EnvironmentWriter;
use setup_r::error::EnvironmentError;
use setup_r::install::{
    CachedTool, CommandRunner, CommandSpec, DownloadError, Downloader, ToolCache, ToolKey,
};
use setup_r::version::catalog::VersionCatalog;
use setup_r::version::error::CatalogError;

/// Catalog returning a fixed version list and counting fetches
pub struct FakeCatalog {
    versions: Option<Vec<String>>,
    fetches: AtomicUsize,
}

impl FakeCatalog {
    pub fn with_versions(versions: &[&str]) -> Self {
        Self {
            versions: Some(versions.iter().map(|v| v.to_string()).collect()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            versions: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionCatalog for FakeCatalog {
    async fn fetch_all(&self) -> Result<Vec<String>, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.versions
            .clone()
            .ok_or_else(|| CatalogError::InvalidResponse("index unavailable".to_string()))
    }
}

/// Downloader that records requested URLs without touching the network
#[derive(Default)]
pub struct RecordingDownloader {
    pub urls: Mutex<Vec<String>>,
}

#[async_trait]
impl Downloader for RecordingDownloader {
    async fn download(&self, url: &str, _dest: &Path) -> Result<(), DownloadError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Runner that records commands and exits with a fixed code
pub struct RecordingRunner {
    exit_code: i32,
    pub commands: Mutex<Vec<String>>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self::exiting_with(0)
    }

    pub fn exiting_with(exit_code: i32) -> Self {
        Self {
            exit_code,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &CommandSpec) -> std::io::Result<Option<i32>> {
        self.commands.lock().unwrap().push(command.to_string());
        Ok(Some(self.exit_code))
    }
}

/// Tool cache held in memory
#[derive(Default)]
pub struct MemoryToolCache {
    entries: Mutex<HashMap<ToolKey, Option<PathBuf>>>,
}

impl MemoryToolCache {
    pub fn with_entry(key: ToolKey, bin_dir: Option<PathBuf>) -> Self {
        let cache = Self::default();
        cache.entries.lock().unwrap().insert(key, bin_dir);
        cache
    }

    pub fn contains(&self, key: &ToolKey) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl ToolCache for MemoryToolCache {
    async fn find(&self, key: &ToolKey) -> std::io::Result<Option<CachedTool>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|bin_dir| CachedTool {
                dir: PathBuf::from("/cache").join(&key.tool).join(&key.version),
                bin_dir: bin_dir.clone(),
            }))
    }

    async fn record(&self, key: &ToolKey, bin_dir: Option<PathBuf>) -> std::io::Result<()> {
        self.entries.lock().unwrap().insert(key.clone(), bin_dir);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvCall {
    Export(String, String),
    AddPath(PathBuf),
    Profile(String),
}

/// Environment writer that records every call in order
#[derive(Default)]
pub struct RecordingEnvironment {
    calls: Mutex<Vec<EnvCall>>,
}

impl RecordingEnvironment {
    pub fn calls(&self) -> Vec<EnvCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnvironmentWriter for RecordingEnvironment {
    async fn export_variable(&self, name: &str, value: &str) -> Result<(), EnvironmentError> {
        self.calls
            .lock()
            .unwrap()
            .push(EnvCall::Export(name.to_string(), value.to_string()));
        Ok(())
    }

    async fn add_path(&self, dir: &Path) -> Result<(), EnvironmentError> {
        self.calls
            .lock()
            .unwrap()
            .push(EnvCall::AddPath(dir.to_path_buf()));
        Ok(())
    }

    async fn write_profile(&self, contents: &str) -> Result<PathBuf, EnvironmentError> {
        self.calls
            .lock()
            .unwrap()
            .push(EnvCall::Profile(contents.to_string()));
        Ok(PathBuf::from("/home/runner/.Rprofile"))
    }
}
