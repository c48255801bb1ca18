//! Default values for the rewrite.

/// SDK constraint applied when no version is given on the command line.
pub const SDK_VERSION: &str = ">=3.5.0 <4.0.0";

/// Environment variable that overrides [`SDK_VERSION`].
pub const SDK_VERSION_ENV: &str = "SDK_VERSION";

/// Picks the version to write: the explicit value if any, else `default`.
pub fn resolve_version<'a>(explicit: Option<&'a str>, default: &'a str) -> &'a str {
    explicit.unwrap_or(default)
}
