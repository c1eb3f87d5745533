//! Platform-specific installation procedures

mod chocolatey;
mod deb;
mod macos;

pub use chocolatey::ChocolateyStrategy;
pub use deb::DebStrategy;
pub use macos::MacPkgStrategy;
