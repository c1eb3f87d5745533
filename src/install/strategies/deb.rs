//! Ubuntu installation from prebuilt .deb packages

use std::path::PathBuf;

use crate::install::error::InstallError;
use crate::install::process::CommandSpec;
use crate::install::strategy::{InstallContext, InstallStrategy};

const DOWNLOAD_BASE_URL: &str = "https://cdn.rstudio.com/r/ubuntu-1804/pkgs";

/// Directory the R and Rscript symlinks are placed in
const LINK_DIR: &str = "/usr/local/bin";

/// Installs the versioned .deb with gdebi and links the binaries onto PATH
pub struct DebStrategy;

impl DebStrategy {
    pub fn file_name(version: &str) -> String {
        format!("r-{}_1_amd64.deb", version)
    }

    pub fn download_url(version: &str) -> String {
        format!("{}/{}", DOWNLOAD_BASE_URL, Self::file_name(version))
    }

    /// Versioned install location; the /usr/local/bin links are shared by all versions
    pub fn bin_dir(version: &str) -> PathBuf {
        PathBuf::from("/opt/R").join(version).join("bin")
    }
}

#[async_trait::async_trait]
impl InstallStrategy for DebStrategy {
    fn name(&self) -> &'static str {
        "gdebi"
    }

    async fn install(
        &self,
        ctx: &InstallContext<'_>,
        version: &str,
    ) -> Result<Option<PathBuf>, InstallError> {
        let deb = ctx
            .download(
                version,
                &Self::download_url(version),
                &Self::file_name(version),
            )
            .await?;

        ctx.run(
            CommandSpec::new("sudo")
                .args(["-E", "apt-get", "install", "-y", "gdebi-core"])
                .env("DEBIAN_FRONTEND", "noninteractive"),
        )
        .await?;
        ctx.run(
            CommandSpec::new("sudo")
                .args(["gdebi", "--non-interactive"])
                .arg(deb.to_string_lossy()),
        )
        .await?;

        let bin_dir = Self::bin_dir(version);
        for binary in ["R", "Rscript"] {
            let target = bin_dir.join(binary);
            ctx.run(
                CommandSpec::new("sudo")
                    .args(["ln", "-sf"])
                    .arg(target.to_string_lossy())
                    .arg(format!("{}/{}", LINK_DIR, binary)),
            )
            .await?;
        }

        Ok(Some(bin_dir))
    }
}
