//! Build command - compile the ROM with the configured toolchain.

use anyhow::Result;
use clap::Args;
use mega_core::config::DEFAULT_COMPILE_TARGET;
use mega_core::Config;
use std::path::PathBuf;

use crate::project::{project_dir, with_dispatcher};

#[derive(Args)]
pub struct BuildArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Make target appended to the build invocation
    #[arg(short, long, default_value = DEFAULT_COMPILE_TARGET)]
    pub target: String,

    /// Print the commands instead of executing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: BuildArgs) -> Result<()> {
    let dir = project_dir(&args.project);
    let cfg = Config::load_merged(&dir)?;

    println!("Building {} ({} toolchain)...", args.target, cfg.toolchain);
    with_dispatcher(&cfg, &dir, args.dry_run, |d| d.compile(true, &args.target))
}
