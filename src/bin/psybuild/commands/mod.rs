//! Command implementations

pub mod modules;
pub mod plan;
pub mod profile;

use anyhow::Result;

use psybuild::{Arch, Platform};

/// Resolve the target platform from an explicit override or the host probe.
pub fn target_platform(explicit: Option<&str>) -> Result<Platform> {
    match explicit {
        Some(name) => Ok(Platform::from_os(name)?),
        None => Ok(Platform::host()?),
    }
}

/// Resolve the target architecture from an explicit override or the host.
pub fn target_arch(explicit: Option<&str>) -> Result<Arch> {
    match explicit {
        Some("32") => Ok(Arch::Bits32),
        Some("64") => Ok(Arch::Bits64),
        Some(other) => anyhow::bail!("invalid architecture `{}` (expected 32 or 64)", other),
        None => Ok(Arch::host()),
    }
}
