//! Plan context - project root, resolved profile, and package metadata.

use std::path::PathBuf;

use crate::core::platform::PlatformProfile;

/// Package name attached to every emitted plan.
pub const PACKAGE_NAME: &str = "Psychtoolbox4Python";

/// Package version attached to every emitted plan.
pub const PACKAGE_VERSION: &str = "0.1";

/// Everything a plan generation run needs, captured up front.
///
/// The profile is resolved exactly once and shared read-only across all
/// module descriptor builds; nothing here is mutated during generation.
#[derive(Debug, Clone)]
pub struct PlanContext {
    /// Project root all source directories are resolved against
    pub root: PathBuf,

    /// The resolved platform profile
    pub profile: PlatformProfile,

    /// Include directory of the numeric array library, located by the
    /// caller (this crate never probes for it)
    pub numpy_include: Option<PathBuf>,

    /// Package name for the emitted plan
    pub package_name: String,

    /// Package version for the emitted plan
    pub package_version: String,
}

impl PlanContext {
    /// Create a context with the default package metadata.
    pub fn new(root: impl Into<PathBuf>, profile: PlatformProfile) -> Self {
        PlanContext {
            root: root.into(),
            profile,
            numpy_include: None,
            package_name: PACKAGE_NAME.to_string(),
            package_version: PACKAGE_VERSION.to_string(),
        }
    }

    /// Set the externally located numeric array include directory.
    pub fn with_numpy_include(mut self, dir: impl Into<PathBuf>) -> Self {
        self.numpy_include = Some(dir.into());
        self
    }
}
