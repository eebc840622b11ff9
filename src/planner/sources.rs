//! Source set aggregation.
//!
//! For one module, walk a fixed set of candidate directories and return the
//! ordered list of source files to compile. The contribution order is a
//! determinism requirement, not cosmetic: downstream tooling relies on the
//! exact ordering and count of entries, so contributions are concatenated
//! without re-sorting and duplicates across overlapping directories are
//! kept, not removed.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::errors::PlanError;
use crate::core::platform::Platform;
use crate::util::fs::{dir_exists, list_source_files};

/// The two eligible source suffixes, matched case-sensitively.
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "cpp"];

/// The scripting-glue source interfacing with the Python runtime. It lives
/// in a subdirectory of `Common/Base`, which the non-recursive listing
/// cannot reach, so it is named explicitly.
pub const SCRIPTING_GLUE_SOURCE: &str = "Common/Base/PythonGlue/PsychScriptingGluePython.c";

/// Ordered sequence of source paths for one module, relative to the
/// project root. Duplicates are preserved.
pub type SourceFileSet = Vec<PathBuf>;

/// Whether a candidate directory must exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absence aborts the plan with `MissingDirectory`
    Required,
    /// Absence contributes nothing
    Optional,
}

/// One candidate source directory for a module.
#[derive(Debug, Clone)]
pub struct SourceDir {
    /// Directory path relative to the project root
    pub rel: PathBuf,

    /// Required or optional
    pub presence: Presence,

    /// Individually named sources appended after this directory's listing,
    /// each included only if present on disk
    pub extra_sources: Vec<PathBuf>,
}

impl SourceDir {
    fn required(rel: impl Into<PathBuf>) -> Self {
        SourceDir {
            rel: rel.into(),
            presence: Presence::Required,
            extra_sources: Vec::new(),
        }
    }

    fn optional(rel: impl Into<PathBuf>) -> Self {
        SourceDir {
            rel: rel.into(),
            presence: Presence::Optional,
            extra_sources: Vec::new(),
        }
    }
}

/// The candidate directories for one module, in contribution order:
/// common base infrastructure, platform base, module common sources, and
/// the optional module-platform override directory.
pub fn candidate_dirs(module: &str, platform: Platform) -> Vec<SourceDir> {
    let os = platform.base_dir();

    let mut common_base = SourceDir::required("Common/Base");
    common_base.extra_sources.push(PathBuf::from(SCRIPTING_GLUE_SOURCE));

    vec![
        common_base,
        SourceDir::required(format!("{}/Base", os)),
        SourceDir::required(format!("Common/{}", module)),
        SourceDir::optional(format!("{}/{}", os, module)),
    ]
}

/// Aggregate the ordered source file set for one module.
///
/// Each directory's own listing is sorted by file name; the contributions
/// are then concatenated in candidate order. A required directory that does
/// not exist fails the whole plan with `MissingDirectory`.
pub fn collect_sources(module: &str, platform: Platform, root: &Path) -> Result<SourceFileSet> {
    let mut sources: SourceFileSet = Vec::new();

    for candidate in candidate_dirs(module, platform) {
        let dir = root.join(&candidate.rel);

        if !dir_exists(&dir) {
            match candidate.presence {
                Presence::Required => {
                    return Err(PlanError::MissingDirectory {
                        module: module.to_string(),
                        path: dir,
                    }
                    .into());
                }
                Presence::Optional => {
                    tracing::debug!(
                        "no {} override directory for {}, skipping",
                        candidate.rel.display(),
                        module
                    );
                    continue;
                }
            }
        }

        for name in list_source_files(&dir, SOURCE_EXTENSIONS)? {
            sources.push(candidate.rel.join(name));
        }

        for extra in &candidate.extra_sources {
            if root.join(extra).is_file() {
                sources.push(extra.clone());
            }
        }
    }

    Ok(sources)
}
