//! Core data structures for Psybuild.
//!
//! This module contains the foundational types used throughout Psybuild:
//! - Platform and architecture identifiers
//! - Resolved platform profiles with capability extras
//! - Static module specifications

pub mod errors;
pub mod module;
pub mod platform;

pub use errors::PlanError;
pub use module::{builtin_modules, Capability, ModuleSpec};
pub use platform::{Arch, Platform, PlatformProfile};
