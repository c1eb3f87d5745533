//! Host platform detection

use std::fmt;

/// Operating systems with a distinct installation procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
}

impl Platform {
    /// Platform of the running process
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a Rust OS name to a platform.
    ///
    /// Anything that is neither Windows nor macOS takes the Linux path.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOS,
            _ => Self::Linux,
        }
    }

    /// Architecture label used as part of the tool cache key
    pub fn arch() -> &'static str {
        arch_label(std::env::consts::ARCH)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOS => "macos",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn arch_label(rust_arch: &'static str) -> &'static str {
    match rust_arch {
        "x86_64" => "x64",
        "aarch64" => "arm64",
        "x86" => "x86",
        other => other,
    }
}
