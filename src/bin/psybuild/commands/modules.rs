//! `psybuild modules` command

use anyhow::Result;

use crate::cli::ModulesArgs;
use psybuild::builtin_modules;

pub fn execute(_args: ModulesArgs) -> Result<()> {
    for module in builtin_modules() {
        if module.capabilities.is_empty() {
            println!("{}", module.name);
        } else {
            let caps: Vec<String> = module
                .capabilities
                .iter()
                .map(|c| format!("{:?}", c).to_lowercase())
                .collect();
            println!("{} [{}]", module.name, caps.join(", "));
        }
    }

    Ok(())
}
