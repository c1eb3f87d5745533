use std::path::PathBuf;

use thiserror::Error;

use crate::install::error::InstallError;
use crate::version::error::ResolveError;

#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Terminal error of a setup run
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Install(#[from] InstallError),

    #[error("Failed to configure R environment: {0}")]
    Environment(#[from] EnvironmentError),
}

/// Coarse classification of a [`SetupError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidSpecifier,
    Retrieval,
    NoMatchingVersion,
    Installation,
    Environment,
}

impl SetupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Resolve(ResolveError::InvalidSpecifier(_)) => ErrorKind::InvalidSpecifier,
            Self::Resolve(ResolveError::Retrieval(_)) => ErrorKind::Retrieval,
            Self::Resolve(ResolveError::NoMatchingVersion(_)) => ErrorKind::NoMatchingVersion,
            Self::Install(_) => ErrorKind::Installation,
            Self::Environment(_) => ErrorKind::Environment,
        }
    }
}
