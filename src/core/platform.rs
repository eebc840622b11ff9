//! Platform identifiers and resolved platform profiles.
//!
//! A `PlatformProfile` is the fully resolved, immutable answer to "what does
//! every module on this platform link against, and what extras do the audio
//! and HID capabilities pull in". It is resolved exactly once per plan and
//! shared read-only across all module descriptor builds.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::PlanError;

/// A recognized host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
}

impl Platform {
    /// Detect the host platform.
    pub fn host() -> Result<Self, PlanError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as reported by `std::env::consts::OS`) to a
    /// recognized platform.
    pub fn from_os(os: &str) -> Result<Self, PlanError> {
        match os {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOs),
            other => Err(PlanError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// The canonical lowercase name used on the CLI and in emitted plans.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
        }
    }

    /// The platform's source directory name under the project root.
    ///
    /// These match the historical source tree layout, hence `OSX` rather
    /// than `macos`.
    pub fn base_dir(&self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::MacOs => "OSX",
        }
    }
}

/// Target pointer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arch {
    #[serde(rename = "32")]
    Bits32,
    #[serde(rename = "64")]
    Bits64,
}

impl Arch {
    /// Detect the host architecture.
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "64") {
            Arch::Bits64
        } else {
            Arch::Bits32
        }
    }
}

/// Platform-specific extras pulled in by one module capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CapabilityExtras {
    /// Additional include directories (-I)
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,

    /// Additional library search paths (-L)
    #[serde(default)]
    pub lib_dirs: Vec<PathBuf>,

    /// Additional libraries to link
    #[serde(default)]
    pub libs: Vec<String>,

    /// Additional linker arguments
    #[serde(default)]
    pub link_args: Vec<String>,

    /// Prebuilt static objects to link as-is
    #[serde(default)]
    pub objects: Vec<PathBuf>,
}

/// A fully resolved platform profile.
///
/// Immutable once resolved; every field is plain data so that plan
/// generation stays a pure function of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformProfile {
    /// The platform this profile was resolved for
    pub platform: Platform,

    /// The target pointer width used for architecture-selected objects
    pub arch: Arch,

    /// Libraries linked into every module
    pub base_libs: Vec<String>,

    /// Compiler arguments applied to every module
    pub base_compile_args: Vec<String>,

    /// Link directives that must precede object files on the link line.
    ///
    /// macOS `-framework` switches must be stated before the objects that
    /// use them. The historical build mutated the `LDFLAGS` environment
    /// variable to get them prepended; carrying them here keeps resolution
    /// side-effect-free and repeatable within one process.
    pub pre_link_args: Vec<String>,

    /// Extras for modules declaring the audio capability
    pub audio: CapabilityExtras,

    /// Extras for modules declaring the HID capability
    pub hid: CapabilityExtras,

    /// Extra runtime files to copy alongside the built package,
    /// keyed by package directory
    pub package_data: BTreeMap<String, Vec<String>>,
}

/// Warning suppression required for reproducible builds on every platform.
const REPRODUCIBLE_BUILD_FLAG: &str = "-Wno-date-time";

impl PlatformProfile {
    /// Resolve the profile for a platform and architecture.
    ///
    /// Table-driven: each arm is one fully populated value, so supporting a
    /// new platform means adding one arm, not touching branch logic.
    pub fn resolve(platform: Platform, arch: Arch) -> Self {
        match platform {
            Platform::Linux => PlatformProfile {
                platform,
                arch,
                base_libs: svec(["c", "rt"]),
                base_compile_args: svec([REPRODUCIBLE_BUILD_FLAG]),
                pre_link_args: vec![],
                audio: CapabilityExtras {
                    libs: svec(["asound"]),
                    objects: vec![PathBuf::from(match arch {
                        Arch::Bits64 => "../Cohorts/PortAudio/libportaudio64Linux.a",
                        Arch::Bits32 => "../Cohorts/PortAudio/libportaudio32Linux.a",
                    })],
                    ..Default::default()
                },
                hid: CapabilityExtras {
                    include_dirs: pvec(["/usr/include/libusb-1.0"]),
                    libs: svec(["dl", "usb-1.0", "X11", "Xi", "util"]),
                    ..Default::default()
                },
                package_data: BTreeMap::new(),
            },

            Platform::Windows => PlatformProfile {
                platform,
                arch,
                base_libs: svec(["kernel32", "user32", "advapi32", "winmm"]),
                base_compile_args: svec([REPRODUCIBLE_BUILD_FLAG]),
                pre_link_args: vec![],
                audio: CapabilityExtras {
                    lib_dirs: pvec(["../Cohorts/PortAudio"]),
                    // Prebuilt portaudio DLL import library instead of a
                    // static object; delayimp for delay loading.
                    libs: svec(["delayimp", "portaudio_x64"]),
                    ..Default::default()
                },
                hid: CapabilityExtras {
                    include_dirs: pvec(["../Cohorts/libusb1-win32/include/libusb-1.0"]),
                    lib_dirs: pvec(["../Cohorts/libusb1-win32/MS64/dll"]),
                    libs: svec(["dinput8", "libusb-1.0", "setupapi"]),
                    ..Default::default()
                },
                // Runtime DLLs that must be shipped next to the modules.
                package_data: BTreeMap::from([(
                    "Psychtoolbox4Python".to_string(),
                    svec(["portaudio_x64.dll", "libusb-1.0.dll"]),
                )]),
            },

            Platform::MacOs => PlatformProfile {
                platform,
                arch,
                base_libs: vec![],
                base_compile_args: svec([REPRODUCIBLE_BUILD_FLAG, "-mmacosx-version-min=10.11"]),
                // -framework switches must precede the objects that use them.
                pre_link_args: svec(["-framework", "Carbon", "-framework", "CoreAudio"]),
                audio: CapabilityExtras {
                    // Statically linked PortAudio build; 64-bit only on macOS.
                    objects: pvec(["../Cohorts/PortAudio/libportaudio_osx_64.a"]),
                    ..Default::default()
                },
                hid: CapabilityExtras {
                    include_dirs: pvec([
                        "../Cohorts/HID_Utilities_64Bit/",
                        "../Cohorts/HID_Utilities_64Bit/IOHIDManager",
                    ]),
                    objects: pvec(["../Cohorts/HID_Utilities_64Bit/build/Release/libHID_Utilities64.a"]),
                    ..Default::default()
                },
                package_data: BTreeMap::new(),
            },
        }
    }

    /// Extras for one capability.
    pub fn capability_extras(&self, capability: crate::core::module::Capability) -> &CapabilityExtras {
        use crate::core::module::Capability;
        match capability {
            Capability::Audio => &self.audio,
            Capability::Hid => &self.hid,
        }
    }
}

fn svec<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pvec<const N: usize>(items: [&str; N]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
