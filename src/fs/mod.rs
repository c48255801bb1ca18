//! File system writes for manifests.
//!
//! Provides a staged whole-file write that replaces the manifest atomically.

pub mod write;

pub use write::{ManifestWrite, WriteState};
