//! Shared helpers for update-sdk-version integration tests.
//!
//! Each test writes a pubspec.yaml into a scratch directory and runs the
//! binary with that directory as its working directory.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(unused)]
pub const FLUTTER_PUBSPEC: &str = "\
name: my_app
description: A new Flutter project.
publish_to: 'none'
version: 1.0.0+1

environment:
  sdk: ^3.0.0
  flutter: '>=3.10.0'

dependencies:
  flutter:
    sdk: flutter
  cupertino_icons: ^1.0.2

dev_dependencies:
  flutter_test:
    sdk: flutter
";

/// Creates a scratch project containing `pubspec.yaml` with `content`.
#[allow(unused)]
pub fn create_project(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pubspec.yaml"), content).unwrap();
    temp
}

#[allow(unused)]
pub fn read_pubspec(project_root: &Path) -> String {
    fs::read_to_string(project_root.join("pubspec.yaml")).unwrap()
}

/// Runs the binary in `project_root` with `args`.
///
/// `SDK_VERSION` is cleared so the host environment cannot leak in.
pub fn run_update(project_root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("update-sdk-version");
    cmd.args(args)
        .env_remove("SDK_VERSION")
        .env_remove("RUST_LOG")
        .current_dir(project_root);

    cmd.assert()
}
