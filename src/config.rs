use std::path::PathBuf;

use crate::platform::Platform;
use crate::version::catalogs::rversions;

// =============================================================================
// Constants
// =============================================================================

/// Name the runtime is recorded under in the tool cache
pub const TOOL_NAME: &str = "R";

/// Repository written into the startup profile unless overridden
pub const DEFAULT_CRAN_URL: &str = "https://cloud.r-project.org";

/// Environment variable pointing R at the user library
pub const LIBRARY_PATH_VAR: &str = "R_LIBS_USER";

/// Subdirectory of the temp root used as the user library
pub const LIBRARY_DIR_NAME: &str = "Library";

/// Values supplied on the command line that take precedence over defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub cran_url: Option<String>,
    pub versions_url: Option<String>,
}

/// Runtime configuration, computed once at startup and passed explicitly
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub platform: Platform,
    pub arch: String,
    /// Scratch root; downloads land here and the user library lives below it
    pub temp_dir: PathBuf,
    pub tool_cache_dir: PathBuf,
    pub profile_path: PathBuf,
    pub cran_url: String,
    /// Base URL of the version index
    pub versions_url: String,
    /// File that exported variables are appended to (`GITHUB_ENV`)
    pub env_file: Option<PathBuf>,
    /// File that PATH entries are appended to (`GITHUB_PATH`)
    pub path_file: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn from_env(platform: Platform, overrides: ConfigOverrides) -> Self {
        Self::from_lookup(
            platform,
            Platform::arch(),
            |name| std::env::var(name).ok(),
            dirs::home_dir(),
            overrides,
        )
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(
        platform: Platform,
        arch: &str,
        lookup: F,
        home_dir: Option<PathBuf>,
        overrides: ConfigOverrides,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let user_profile = var("USERPROFILE");
        let base = base_location(platform, user_profile.clone());

        let temp_dir = var("RUNNER_TEMP")
            .map(PathBuf::from)
            .unwrap_or_else(|| base.join("actions").join("temp"));
        let tool_cache_dir = var("RUNNER_TOOL_CACHE")
            .map(PathBuf::from)
            .unwrap_or_else(|| base.join("actions").join("cache"));

        Self {
            platform,
            arch: arch.to_string(),
            temp_dir,
            tool_cache_dir,
            profile_path: profile_path_with_env(platform, user_profile, home_dir),
            cran_url: overrides
                .cran_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_CRAN_URL.to_string()),
            versions_url: overrides
                .versions_url
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| rversions::DEFAULT_BASE_URL.to_string()),
            env_file: var("GITHUB_ENV").map(PathBuf::from),
            path_file: var("GITHUB_PATH").map(PathBuf::from),
        }
    }

    /// Directory exported as the user package library
    pub fn library_dir(&self) -> PathBuf {
        self.temp_dir.join(LIBRARY_DIR_NAME)
    }

    /// Startup profile line selecting the package repository
    pub fn profile_contents(&self) -> String {
        format!("options(repos = \"{}\")\n", self.cran_url)
    }
}

fn base_location(platform: Platform, user_profile: Option<String>) -> PathBuf {
    match platform {
        Platform::Windows => PathBuf::from(user_profile.unwrap_or_else(|| "C:\\".to_string())),
        Platform::MacOS => PathBuf::from("/Users"),
        Platform::Linux => PathBuf::from("/home"),
    }
}

fn profile_path_with_env(
    platform: Platform,
    user_profile: Option<String>,
    home_dir: Option<PathBuf>,
) -> PathBuf {
    match platform {
        Platform::Windows => PathBuf::from(user_profile.unwrap_or_else(|| "C:\\".to_string()))
            .join("Documents")
            .join(".Rprofile"),
        Platform::MacOS | Platform::Linux => home_dir
            .unwrap_or_else(|| PathBuf::from("/Users"))
            .join(".Rprofile"),
    }
}
