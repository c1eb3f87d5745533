//! Installs a requested R version on a CI runner and prepares its environment.
//!
//! - [`version`]: resolving version specifiers against the published index
//! - [`install`]: per-platform installation and the tool cache
//! - [`environment`]: exporting variables and writing the R profile
//! - [`orchestrator`]: the end-to-end setup sequence

pub mod config;
pub mod environment;
pub mod error;
pub mod install;
pub mod logging;
pub mod orchestrator;
pub mod platform;
pub mod version;
