//! Rewrite the Dart SDK constraint (`environment.sdk`) in a `pubspec.yaml`.

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod manifest;

pub use error::*;

use colored::Colorize;

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    execute(&cli, config::SDK_VERSION)
}

/// Runs one rewrite for already-parsed arguments.
///
/// `default_version` is used when the command line carries no version.
pub fn execute(cli: &cli::Cli, default_version: &str) -> Result<()> {
    let version = config::resolve_version(cli.version.as_deref(), default_version);
    log::debug!(
        "Setting sdk constraint in {} to {}",
        cli.manifest_path.display(),
        version
    );

    let change = manifest::update_sdk_version(&cli.manifest_path, version, cli.dry_run)?;

    if cli.quiet {
        return Ok(());
    }

    match change {
        Some(change) if cli.dry_run => println!(
            "{} sdk {} → {} (run without {} to apply)",
            "Would update".yellow().bold(),
            change.old.yellow(),
            change.new.green(),
            "--dry-run".cyan()
        ),
        Some(change) => println!(
            "{} sdk {} → {}",
            "✓ Updated".green().bold(),
            change.old.yellow(),
            change.new.green().bold()
        ),
        None => println!(
            "{} {}",
            "No environment.sdk entry in".yellow(),
            cli.manifest_path.display()
        ),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
