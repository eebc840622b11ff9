//! `psybuild plan` command

use anyhow::Result;

use crate::cli::PlanArgs;
use crate::commands::{target_arch, target_platform};
use psybuild::{builtin_modules, BuildPlan, ModuleSpec, PlanContext, PlatformProfile};

pub fn execute(args: PlanArgs) -> Result<()> {
    let platform = target_platform(args.platform.as_deref())?;
    let arch = target_arch(args.arch.as_deref())?;

    tracing::debug!("planning for {} ({:?})", platform.name(), arch);

    let profile = PlatformProfile::resolve(platform, arch);

    let specs = select_modules(builtin_modules(), &args.modules)?;

    let mut ctx = PlanContext::new(&args.root, profile);
    if let Some(numpy) = &args.numpy_include {
        ctx = ctx.with_numpy_include(numpy);
    }

    let plan = BuildPlan::assemble(&ctx, &specs)?;

    match &args.out {
        Some(path) => {
            plan.emit(path)?;
            tracing::info!("wrote plan for {} modules to {}", plan.module_count(), path.display());
        }
        None => println!("{}", plan.to_json()?),
    }

    Ok(())
}

/// Apply the module-name filter, preserving declared order.
fn select_modules(all: Vec<ModuleSpec>, filter: &[String]) -> Result<Vec<ModuleSpec>> {
    if filter.is_empty() {
        return Ok(all);
    }

    for name in filter {
        if !all.iter().any(|m| &m.name == name) {
            anyhow::bail!(
                "unknown module `{}`\n\
                 help: Run `psybuild modules` to see the builtin module table",
                name
            );
        }
    }

    Ok(all
        .into_iter()
        .filter(|m| filter.iter().any(|f| f == &m.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_modules_empty_filter_keeps_all() {
        let selected = select_modules(builtin_modules(), &[]).unwrap();
        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn test_select_modules_preserves_declared_order() {
        let filter = vec!["PsychHID".to_string(), "WaitSecs".to_string()];
        let selected = select_modules(builtin_modules(), &filter).unwrap();

        let names: Vec<&str> = selected.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["WaitSecs", "PsychHID"]);
    }

    #[test]
    fn test_select_modules_unknown_name() {
        let filter = vec!["Screen".to_string()];
        let err = select_modules(builtin_modules(), &filter).unwrap_err();
        assert!(err.to_string().contains("unknown module `Screen`"));
    }
}
