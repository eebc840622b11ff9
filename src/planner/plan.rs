//! Build plan assembly.
//!
//! A `BuildPlan` collects the build descriptor of every module plus the
//! package-level metadata for one generation run. Generation is
//! single-threaded and synchronous: resolve the profile, aggregate each
//! module's sources, build its descriptor, assemble the plan. Given an
//! unchanged filesystem and platform, two runs emit byte-identical plans.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::errors::PlanError;
use crate::core::module::ModuleSpec;
use crate::planner::context::PlanContext;
use crate::planner::descriptor::BuildDescriptor;
use crate::planner::sources::collect_sources;
use crate::util::fs::write_string;

/// A complete build plan, handed to an external compiler/linker driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildPlan {
    /// Package name
    pub package: String,

    /// Package version
    pub version: String,

    /// Module descriptors, in declared module order
    pub descriptors: Vec<BuildDescriptor>,

    /// Platform-dependent runtime files to co-locate with the package
    pub package_data: BTreeMap<String, Vec<String>>,
}

impl BuildPlan {
    /// Assemble the plan for the given module specs.
    ///
    /// Specs are processed in caller-declared order, which is preserved in
    /// the output. A repeated module name fails the whole plan immediately;
    /// no partial plan is ever returned.
    pub fn assemble(ctx: &PlanContext, specs: &[ModuleSpec]) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut descriptors = Vec::with_capacity(specs.len());

        for spec in specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(PlanError::DuplicateModule {
                    name: spec.name.clone(),
                }
                .into());
            }

            tracing::debug!("aggregating sources for {}", spec.name);
            let sources = collect_sources(&spec.name, ctx.profile.platform, &ctx.root)?;

            descriptors.push(BuildDescriptor::build(spec, ctx, sources));
        }

        Ok(BuildPlan {
            package: ctx.package_name.clone(),
            version: ctx.package_version.clone(),
            descriptors,
            package_data: ctx.profile.package_data.clone(),
        })
    }

    /// Serialize the plan as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the plan as JSON to a file.
    pub fn emit(&self, path: &Path) -> Result<()> {
        write_string(path, &self.to_json()?)
    }

    /// Get the number of module descriptors.
    pub fn module_count(&self) -> usize {
        self.descriptors.len()
    }
}
