use semver::Version;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "4" or "4.1" by padding with zeros.
///
/// Examples:
/// - "4" -> Version(4, 0, 0)
/// - "4.1" -> Version(4, 1, 0)
/// - "4.1.3" -> Version(4, 1, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}
