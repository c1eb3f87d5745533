//! Platform installation strategies
//!
//! Each [`Platform`] maps to exactly one [`InstallStrategy`] through
//! [`strategy_for`]; the selector owns the collaborators a strategy needs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::install::download::Downloader;
use crate::install::error::InstallError;
use crate::install::process::{CommandRunner, CommandSpec};
use crate::install::strategies::{ChocolateyStrategy, DebStrategy, MacPkgStrategy};
use crate::platform::Platform;

/// Collaborators handed to a strategy for one installation
pub struct InstallContext<'a> {
    pub downloader: &'a dyn Downloader,
    pub runner: &'a dyn CommandRunner,
    /// Directory installer artifacts are saved to
    pub download_dir: &'a Path,
}

impl InstallContext<'_> {
    /// Download `url` into the download directory as `file_name`
    pub async fn download(
        &self,
        version: &str,
        url: &str,
        file_name: &str,
    ) -> Result<PathBuf, InstallError> {
        let dest = self.download_dir.join(file_name);
        info!("Downloading {}", url);

        self.downloader
            .download(url, &dest)
            .await
            .map_err(|source| InstallError::Download {
                version: version.to_string(),
                url: url.to_string(),
                source,
            })?;

        Ok(dest)
    }

    /// Run `command`, failing unless it exits with status 0
    pub async fn run(&self, command: CommandSpec) -> Result<(), InstallError> {
        info!("Running {}", command);

        match self.runner.run(&command).await {
            Ok(Some(0)) => Ok(()),
            Ok(Some(code)) => Err(InstallError::CommandFailed {
                command: command.to_string(),
                status: format!("exit code {}", code),
            }),
            Ok(None) => Err(InstallError::CommandFailed {
                command: command.to_string(),
                status: "a signal".to_string(),
            }),
            Err(source) => Err(InstallError::Spawn {
                command: command.to_string(),
                source,
            }),
        }
    }
}

/// A platform-specific installation procedure
#[async_trait::async_trait]
pub trait InstallStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Install `version`, returning the directory holding the R executables
    /// when it is not already on PATH
    async fn install(
        &self,
        ctx: &InstallContext<'_>,
        version: &str,
    ) -> Result<Option<PathBuf>, InstallError>;
}

/// Dispatch table from platform to installation procedure
pub fn strategy_for(platform: Platform) -> &'static dyn InstallStrategy {
    match platform {
        Platform::Windows => &ChocolateyStrategy,
        Platform::MacOS => &MacPkgStrategy,
        Platform::Linux => &DebStrategy,
    }
}

/// Selects the strategy for a platform and runs it
pub struct StrategySelector {
    downloader: Arc<dyn Downloader>,
    runner: Arc<dyn CommandRunner>,
    download_dir: PathBuf,
}

impl StrategySelector {
    pub fn new(
        downloader: Arc<dyn Downloader>,
        runner: Arc<dyn CommandRunner>,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            downloader,
            runner,
            download_dir,
        }
    }

    pub async fn select_and_install(
        &self,
        platform: Platform,
        version: &str,
    ) -> Result<Option<PathBuf>, InstallError> {
        let strategy = strategy_for(platform);
        info!(
            "Installing R {} on {} using {}",
            version,
            platform,
            strategy.name()
        );

        let ctx = InstallContext {
            downloader: self.downloader.as_ref(),
            runner: self.runner.as_ref(),
            download_dir: &self.download_dir,
        };

        strategy.install(&ctx, version).await
    }
}
