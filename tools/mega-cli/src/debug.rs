//! Debug command - compile with debug symbols.
//!
//! Rejected up front on SGDK/GENDEV, which cannot produce debug builds
//! on this platform; nothing reaches the shell in that case.

use anyhow::Result;
use clap::Args;
use mega_core::Config;
use std::path::PathBuf;

use crate::project::{project_dir, with_dispatcher};

#[derive(Args)]
pub struct DebugArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Print the commands instead of executing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: DebugArgs) -> Result<()> {
    let dir = project_dir(&args.project);
    let cfg = Config::load_merged(&dir)?;

    println!("Building debug ({} toolchain)...", cfg.toolchain);
    with_dispatcher(&cfg, &dir, args.dry_run, |d| d.compile_for_debug())
}
