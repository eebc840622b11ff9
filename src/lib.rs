//! Psybuild - A declarative build-plan generator for Psychtoolbox Python extension modules
//!
//! This crate provides the core library functionality for Psybuild,
//! including platform profile resolution, source aggregation, and
//! build plan assembly.

pub mod core;
pub mod planner;
pub mod util;

pub use crate::core::{
    errors::PlanError,
    module::{builtin_modules, Capability, ModuleSpec},
    platform::{Arch, Platform, PlatformProfile},
};

pub use crate::planner::{BuildDescriptor, BuildPlan, PlanContext};
