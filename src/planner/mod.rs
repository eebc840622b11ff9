//! Build plan generation.
//!
//! This module implements the generation pipeline: resolve a platform
//! profile once, aggregate each module's sources, build one immutable
//! descriptor per module, and assemble the final plan.

pub mod context;
pub mod descriptor;
pub mod plan;
pub mod sources;

pub use context::PlanContext;
pub use descriptor::BuildDescriptor;
pub use plan::BuildPlan;
pub use sources::{collect_sources, SourceFileSet, SOURCE_EXTENSIONS};
