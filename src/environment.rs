//! Environment configuration for later build steps

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::EnvironmentError;

/// Trait for persisting environment for the steps that run after this one
#[async_trait::async_trait]
pub trait EnvironmentWriter: Send + Sync {
    /// Export `name=value` to subsequent steps
    async fn export_variable(&self, name: &str, value: &str) -> Result<(), EnvironmentError>;

    /// Prepend `dir` to PATH for subsequent steps
    async fn add_path(&self, dir: &Path) -> Result<(), EnvironmentError>;

    /// Replace the R startup profile, returning where it was written
    async fn write_profile(&self, contents: &str) -> Result<PathBuf, EnvironmentError>;
}

/// Writes through the runner's `GITHUB_ENV` / `GITHUB_PATH` files
pub struct ActionsEnvironment {
    env_file: Option<PathBuf>,
    path_file: Option<PathBuf>,
    profile_path: PathBuf,
}

impl ActionsEnvironment {
    pub fn new(env_file: Option<PathBuf>, path_file: Option<PathBuf>, profile_path: PathBuf) -> Self {
        Self {
            env_file,
            path_file,
            profile_path,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.env_file.clone(),
            config.path_file.clone(),
            config.profile_path.clone(),
        )
    }
}

async fn append_line(path: &Path, line: &str) -> Result<(), EnvironmentError> {
    let write = async {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(format!("{}\n", line).as_bytes()).await?;
        file.flush().await
    };

    write.await.map_err(|source| EnvironmentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait::async_trait]
impl EnvironmentWriter for ActionsEnvironment {
    async fn export_variable(&self, name: &str, value: &str) -> Result<(), EnvironmentError> {
        let Some(env_file) = &self.env_file else {
            warn!("GITHUB_ENV is not set, not exporting {}={}", name, value);
            return Ok(());
        };

        debug!("Exporting {}={}", name, value);
        append_line(env_file, &format!("{}={}", name, value)).await
    }

    async fn add_path(&self, dir: &Path) -> Result<(), EnvironmentError> {
        let Some(path_file) = &self.path_file else {
            warn!("GITHUB_PATH is not set, not adding {} to PATH", dir.display());
            return Ok(());
        };

        debug!("Adding {} to PATH", dir.display());
        append_line(path_file, &dir.to_string_lossy()).await
    }

    async fn write_profile(&self, contents: &str) -> Result<PathBuf, EnvironmentError> {
        let path = &self.profile_path;
        debug!("R profile is at {}", path.display());

        let write = async {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, contents).await
        };
        write.await.map_err(|source| EnvironmentError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn export_variable_appends_to_env_file() {
        let temp_dir = TempDir::new().unwrap();
        let env_file = temp_dir.path().join("github_env");
        std::fs::write(&env_file, "EXISTING=1\n").unwrap();

        let environment = ActionsEnvironment::new(
            Some(env_file.clone()),
            None,
            temp_dir.path().join(".Rprofile"),
        );
        environment
            .export_variable("R_LIBS_USER", "/runner/_temp/Library")
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&env_file).unwrap(),
            "EXISTING=1\nR_LIBS_USER=/runner/_temp/Library\n"
        );
    }

    #[tokio::test]
    async fn add_path_appends_directory_line() {
        let temp_dir = TempDir::new().unwrap();
        let path_file = temp_dir.path().join("github_path");

        let environment = ActionsEnvironment::new(
            None,
            Some(path_file.clone()),
            temp_dir.path().join(".Rprofile"),
        );
        environment
            .add_path(Path::new("/usr/local/bin"))
            .await
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path_file).unwrap(),
            "/usr/local/bin\n"
        );
    }

    #[tokio::test]
    async fn export_and_add_path_are_skipped_without_runner_files() {
        let temp_dir = TempDir::new().unwrap();
        let environment =
            ActionsEnvironment::new(None, None, temp_dir.path().join(".Rprofile"));

        environment.export_variable("R_LIBS_USER", "/x").await.unwrap();
        environment.add_path(Path::new("/x")).await.unwrap();
    }

    #[tokio::test]
    async fn write_profile_replaces_contents_and_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let profile = temp_dir.path().join("Documents").join(".Rprofile");

        let environment = ActionsEnvironment::new(None, None, profile.clone());
        environment.write_profile("old\n").await.unwrap();
        let written = environment
            .write_profile("options(repos = \"https://cloud.r-project.org\")\n")
            .await
            .unwrap();

        assert_eq!(written, profile);
        assert_eq!(
            std::fs::read_to_string(&profile).unwrap(),
            "options(repos = \"https://cloud.r-project.org\")\n"
        );
    }

    #[tokio::test]
    async fn export_variable_reports_unwritable_env_file() {
        let temp_dir = TempDir::new().unwrap();
        let env_file = temp_dir.path().join("missing-dir").join("github_env");

        let environment =
            ActionsEnvironment::new(Some(env_file.clone()), None, temp_dir.path().join("p"));
        let result = environment.export_variable("A", "b").await;

        assert!(matches!(result, Err(EnvironmentError::Write { path, .. }) if path == env_file));
    }
}
