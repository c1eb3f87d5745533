//! Artifact downloads

use std::path::Path;

#[cfg(test)]
use mockall::automock;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::install::error::DownloadError;

/// Trait for fetching an installer artifact to a local file
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Downloader: Send + Sync {
    /// Downloads `url` into `dest`, creating parent directories as needed
    async fn download(&self, url: &str, dest: &Path) -> Result<(), DownloadError>;
}

/// Downloader that streams HTTP responses straight to disk
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("setup-r/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<(), DownloadError> {
        debug!("Downloading {} to {}", url, dest.display());

        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status(status.as_u16()));
        }

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = tokio::fs::File::create(dest).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!("Downloaded {} bytes to {}", written, dest.display());
        Ok(())
    }
}
