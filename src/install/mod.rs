//! Installation layer
//!
//! Everything that touches the host once a version is resolved: downloading
//! installer artifacts, running the platform package manager, and recording
//! finished installs in the tool cache.
//!
//! # Modules
//!
//! - [`download`]: Downloader trait and the HTTP implementation
//! - [`process`]: External command execution
//! - [`strategy`]: Strategy trait and the platform dispatch table
//! - [`strategies`]: Per-platform installation procedures
//! - [`tool_cache`]: Directory-backed record of installed versions
//! - [`error`]: Error types for download and install steps

pub mod download;
pub mod error;
pub mod process;
pub mod strategies;
pub mod strategy;
pub mod tool_cache;

pub use download::{Downloader, HttpDownloader};
pub use error::{DownloadError, InstallError};
pub use process::{CommandRunner, CommandSpec, TokioCommandRunner};
pub use strategy::{InstallContext, InstallStrategy, StrategySelector};
pub use tool_cache::{CachedTool, DirToolCache, ToolCache, ToolKey};
