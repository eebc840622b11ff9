//! Static module specifications.
//!
//! Each extension module is described once, before generation begins, by a
//! `ModuleSpec`. Capabilities are declared here as flags; the matching
//! platform extras live on the resolved `PlatformProfile`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// An optional module feature that pulls in extra platform-specific
/// includes, libraries, and prebuilt objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Audio i/o backend (PortAudio)
    Audio,
    /// USB-HID device handling (libusb, HID utilities)
    Hid,
}

/// Static per-module configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Module name (unique key within a plan)
    pub name: String,

    /// Declared capabilities
    #[serde(default)]
    pub capabilities: Vec<Capability>,

    /// Extra include directories beyond the standard layout
    #[serde(default)]
    pub extra_include_dirs: Vec<PathBuf>,

    /// Extra libraries to link
    #[serde(default)]
    pub extra_libs: Vec<String>,

    /// Extra library search paths
    #[serde(default)]
    pub extra_lib_dirs: Vec<PathBuf>,

    /// Extra linker arguments
    #[serde(default)]
    pub extra_link_args: Vec<String>,

    /// Extra prebuilt static objects
    #[serde(default)]
    pub extra_objects: Vec<PathBuf>,
}

impl ModuleSpec {
    /// Create a spec with no capabilities or extras.
    pub fn new(name: impl Into<String>) -> Self {
        ModuleSpec {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare a capability.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Check whether this module declares a capability.
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// The builtin module table, in declared build order.
///
/// The order is preserved in the emitted plan; downstream tooling may
/// depend on it, so it is intentionally not alphabetized.
pub fn builtin_modules() -> Vec<ModuleSpec> {
    vec![
        // Timed waits.
        ModuleSpec::new("WaitSecs"),
        // Clock queries.
        ModuleSpec::new("GetSecs"),
        // Serial port i/o.
        ModuleSpec::new("IOPort"),
        // USB-HID device handling.
        ModuleSpec::new("PsychHID").with_capability(Capability::Hid),
        // High precision multi-channel audio i/o.
        ModuleSpec::new("PsychPortAudio").with_capability(Capability::Audio),
    ]
}
