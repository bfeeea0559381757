//! Clean command - remove build artifacts via the configured toolchain.

use anyhow::Result;
use clap::Args;
use mega_core::Config;
use std::path::PathBuf;

use crate::project::{project_dir, with_dispatcher};

#[derive(Args)]
pub struct CleanArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Print the commands instead of executing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: CleanArgs) -> Result<()> {
    let dir = project_dir(&args.project);
    let cfg = Config::load_merged(&dir)?;

    println!("Cleaning ({} toolchain)...", cfg.toolchain);
    with_dispatcher(&cfg, &dir, args.dry_run, |d| d.clean())
}
