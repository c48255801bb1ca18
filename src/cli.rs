use crate::config::SDK_VERSION_ENV;
use crate::manifest::DEFAULT_MANIFEST;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "update-sdk-version", version, about)]
pub struct Cli {
    /// New SDK constraint for `environment.sdk`
    ///
    /// Written verbatim. Falls back to $SDK_VERSION, then to the built-in default.
    #[arg(id = "sdk_version", value_name = "VERSION", env = SDK_VERSION_ENV)]
    pub version: Option<String>,

    /// Path to the manifest to rewrite
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    pub manifest_path: PathBuf,

    /// Show the change without writing it
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["update-sdk-version"]).unwrap();
        assert_eq!(cli.manifest_path, PathBuf::from("pubspec.yaml"));
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_positional_version() {
        let cli = Cli::try_parse_from(["update-sdk-version", "^3.5.0"]).unwrap();
        assert_eq!(cli.version.as_deref(), Some("^3.5.0"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["update-sdk-version", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_rejects_second_positional() {
        assert!(Cli::try_parse_from(["update-sdk-version", "^3.5.0", "^3.6.0"]).is_err());
    }
}
