//! macOS installation from CRAN's signed .pkg installers

use std::path::PathBuf;

use crate::install::error::InstallError;
use crate::install::process::CommandSpec;
use crate::install::strategy::{InstallContext, InstallStrategy};

const DOWNLOAD_BASE_URL: &str = "https://cloud.r-project.org/bin/macosx";

/// Runs the system `installer` against the downloaded package
pub struct MacPkgStrategy;

impl MacPkgStrategy {
    pub fn file_name(version: &str) -> String {
        format!("R-{}.pkg", version)
    }

    pub fn download_url(version: &str) -> String {
        format!("{}/{}", DOWNLOAD_BASE_URL, Self::file_name(version))
    }
}

#[async_trait::async_trait]
impl InstallStrategy for MacPkgStrategy {
    fn name(&self) -> &'static str {
        "macos-pkg"
    }

    async fn install(
        &self,
        ctx: &InstallContext<'_>,
        version: &str,
    ) -> Result<Option<PathBuf>, InstallError> {
        let pkg = ctx
            .download(
                version,
                &Self::download_url(version),
                &Self::file_name(version),
            )
            .await?;

        ctx.run(
            CommandSpec::new("sudo")
                .args(["installer", "-pkg"])
                .arg(pkg.to_string_lossy())
                .args(["-target", "/"]),
        )
        .await?;

        // The package links R and Rscript into /usr/local/bin itself
        Ok(None)
    }
}
