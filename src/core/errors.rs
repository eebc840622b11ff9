//! Plan generation error types.

use std::path::PathBuf;

use thiserror::Error;

/// Error during build plan generation.
///
/// All variants are fatal: generation is a one-shot deterministic transform
/// over static inputs, so nothing is retried and no partial plan is ever
/// emitted.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The host platform is not one of the recognized targets.
    #[error("unsupported platform `{os}` (recognized: linux, windows, macos)")]
    UnsupportedPlatform { os: String },

    /// A mandatory source directory does not exist.
    #[error("missing source directory for module `{module}`: {}", .path.display())]
    MissingDirectory { module: String, path: PathBuf },

    /// Two module specs share the same name.
    #[error("duplicate module `{name}` in plan")]
    DuplicateModule { name: String },
}
