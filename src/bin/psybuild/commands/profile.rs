//! `psybuild profile` command

use anyhow::Result;

use crate::cli::ProfileArgs;
use crate::commands::{target_arch, target_platform};
use psybuild::PlatformProfile;

pub fn execute(args: ProfileArgs) -> Result<()> {
    let platform = target_platform(args.platform.as_deref())?;
    let arch = target_arch(args.arch.as_deref())?;

    let profile = PlatformProfile::resolve(platform, arch);

    println!("# Profile for {} ({:?}):", platform.name(), arch);
    println!();

    println!("base libs:");
    for lib in &profile.base_libs {
        println!("  -l{}", lib);
    }

    println!("base compile args:");
    for arg in &profile.base_compile_args {
        println!("  {}", arg);
    }

    if !profile.pre_link_args.is_empty() {
        println!("pre-link args (must precede objects):");
        for arg in &profile.pre_link_args {
            println!("  {}", arg);
        }
    }

    for (name, extras) in [("audio", &profile.audio), ("hid", &profile.hid)] {
        println!("{} capability:", name);
        for dir in &extras.include_dirs {
            println!("  -I{}", dir.display());
        }
        for dir in &extras.lib_dirs {
            println!("  -L{}", dir.display());
        }
        for lib in &extras.libs {
            println!("  -l{}", lib);
        }
        for arg in &extras.link_args {
            println!("  {}", arg);
        }
        for object in &extras.objects {
            println!("  {}", object.display());
        }
    }

    if !profile.package_data.is_empty() {
        println!("runtime files:");
        for (package, files) in &profile.package_data {
            println!("  {}: {}", package, files.join(", "));
        }
    }

    Ok(())
}
