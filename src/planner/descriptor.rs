//! Build descriptor composition.
//!
//! A `BuildDescriptor` fully and exclusively determines one compilable
//! unit: nothing in the downstream build step may consult state that is
//! not captured here.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::module::ModuleSpec;
use crate::planner::context::PlanContext;
use crate::planner::sources::SourceFileSet;

/// Define marking every translation unit as a mex-style module.
const MODULE_FLAG_MACRO: &str = "PTBOCTAVE3MEX";

/// The language marker telling the common infrastructure which scripting
/// runtime it is glued to.
const LANGUAGE_MACRO: (&str, &str) = ("PSYCH_LANGUAGE", "PSYCH_PYTHON");

/// The complete, immutable compile/link specification for one module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildDescriptor {
    /// Module name
    pub name: String,

    /// Preprocessor defines; `None` values are bare flags
    pub macros: BTreeMap<String, Option<String>>,

    /// Include directories, in search order
    pub include_dirs: Vec<PathBuf>,

    /// Ordered source files, relative to the project root
    pub sources: Vec<PathBuf>,

    /// Libraries to link
    pub libs: Vec<String>,

    /// Library search paths
    pub lib_dirs: Vec<PathBuf>,

    /// Compiler arguments
    pub compile_args: Vec<String>,

    /// Linker arguments; pre-link directives come first
    pub link_args: Vec<String>,

    /// Prebuilt static objects to link as-is
    pub extra_objects: Vec<PathBuf>,
}

impl BuildDescriptor {
    /// Compose the descriptor for one module from its static spec, the
    /// resolved platform profile, and the aggregated source set.
    pub fn build(spec: &ModuleSpec, ctx: &PlanContext, sources: SourceFileSet) -> Self {
        let profile = &ctx.profile;
        let os = profile.platform.base_dir();

        // Exactly one module-identity macro and one module-name macro,
        // plus the global language/environment markers.
        let mut macros = BTreeMap::new();
        macros.insert(format!("PTBMODULE_{}", spec.name), None);
        macros.insert("PTBMODULENAME".to_string(), Some(spec.name.clone()));
        macros.insert(MODULE_FLAG_MACRO.to_string(), None);
        macros.insert(LANGUAGE_MACRO.0.to_string(), Some(LANGUAGE_MACRO.1.to_string()));

        let mut include_dirs = vec![PathBuf::from(format!("Common/{}", spec.name))];
        if let Some(numpy) = &ctx.numpy_include {
            include_dirs.push(numpy.clone());
        }
        include_dirs.push(PathBuf::from("Common/Base"));
        include_dirs.push(PathBuf::from("Common/Screen"));
        include_dirs.push(PathBuf::from(format!("{}/Base", os)));
        include_dirs.push(PathBuf::from(format!("{}/{}", os, spec.name)));

        let mut libs = profile.base_libs.clone();
        let mut lib_dirs = Vec::new();
        let mut link_args = profile.pre_link_args.clone();
        let mut extra_objects = Vec::new();

        for capability in &spec.capabilities {
            let extras = profile.capability_extras(*capability);
            include_dirs.extend(extras.include_dirs.iter().cloned());
            lib_dirs.extend(extras.lib_dirs.iter().cloned());
            libs.extend(extras.libs.iter().cloned());
            link_args.extend(extras.link_args.iter().cloned());
            extra_objects.extend(extras.objects.iter().cloned());
        }

        include_dirs.extend(spec.extra_include_dirs.iter().cloned());
        lib_dirs.extend(spec.extra_lib_dirs.iter().cloned());
        libs.extend(spec.extra_libs.iter().cloned());
        link_args.extend(spec.extra_link_args.iter().cloned());
        extra_objects.extend(spec.extra_objects.iter().cloned());

        BuildDescriptor {
            name: spec.name.clone(),
            macros,
            include_dirs,
            sources,
            libs,
            lib_dirs,
            compile_args: profile.base_compile_args.clone(),
            link_args,
            extra_objects,
        }
    }
}
