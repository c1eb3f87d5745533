//! Windows installation through Chocolatey

use std::path::PathBuf;

use crate::install::error::InstallError;
use crate::install::process::CommandSpec;
use crate::install::strategy::{InstallContext, InstallStrategy};

/// Installs the `r.project` Chocolatey package pinned to the resolved version
pub struct ChocolateyStrategy;

impl ChocolateyStrategy {
    /// Where the Chocolatey package places the R executables
    pub fn bin_dir(version: &str) -> PathBuf {
        PathBuf::from(format!("C:\\Program Files\\R\\R-{}\\bin", version))
    }
}

#[async_trait::async_trait]
impl InstallStrategy for ChocolateyStrategy {
    fn name(&self) -> &'static str {
        "chocolatey"
    }

    async fn install(
        &self,
        ctx: &InstallContext<'_>,
        version: &str,
    ) -> Result<Option<PathBuf>, InstallError> {
        ctx.run(
            CommandSpec::new("choco")
                .args(["install", "r.project", "--version"])
                .arg(version)
                .args(["-y", "--no-progress"]),
        )
        .await?;

        Ok(Some(Self::bin_dir(version)))
    }
}
