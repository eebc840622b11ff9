//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Psybuild - build-plan generator for Psychtoolbox Python extension modules
#[derive(Parser)]
#[command(name = "psybuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the build plan and emit it as JSON
    Plan(PlanArgs),

    /// Show the resolved platform profile
    Profile(ProfileArgs),

    /// List the builtin module table
    Modules(ModulesArgs),
}

#[derive(Args)]
pub struct PlanArgs {
    /// Project root containing the Common/ and platform source trees
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Target platform (linux, windows, macos); defaults to the host
    #[arg(long)]
    pub platform: Option<String>,

    /// Target pointer width (32 or 64); defaults to the host
    #[arg(long)]
    pub arch: Option<String>,

    /// Include directory of the numeric array library (located externally)
    #[arg(long)]
    pub numpy_include: Option<PathBuf>,

    /// Restrict the plan to the named modules (repeatable)
    #[arg(long = "module")]
    pub modules: Vec<String>,

    /// Write the plan to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct ProfileArgs {
    /// Target platform (linux, windows, macos); defaults to the host
    #[arg(long)]
    pub platform: Option<String>,

    /// Target pointer width (32 or 64); defaults to the host
    #[arg(long)]
    pub arch: Option<String>,
}

#[derive(Args)]
pub struct ModulesArgs {}
