//! Run command - compile and launch the ROM in the emulator.
//!
//! The compile and the emulator launch go out as one `&&`-chained shell
//! line; `--no-build` launches the existing ROM only.

use anyhow::Result;
use clap::Args;
use mega_core::Config;
use std::path::{Path, PathBuf};

use crate::project::{project_dir, with_dispatcher};

#[derive(Args)]
pub struct RunArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Don't rebuild, just launch the existing ROM
    #[arg(long)]
    pub no_build: bool,

    /// Print the commands instead of executing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let dir = project_dir(&args.project);
    let cfg = Config::load_merged(&dir)?;

    let emulator = cfg.emulator_command();
    if !args.dry_run && which::which(emulator).is_err() && !Path::new(emulator).exists() {
        eprintln!(
            "Warning: emulator \"{}\" not found on PATH.\n\
             Configure one with 'mega set-emulator <path>'.",
            emulator
        );
    }

    if args.no_build {
        println!("Launching {}...", emulator);
        with_dispatcher(&cfg, &dir, args.dry_run, |d| d.run(true))
    } else {
        println!("Building and launching ({} toolchain)...", cfg.toolchain);
        with_dispatcher(&cfg, &dir, args.dry_run, |d| d.compile_and_run())
    }
}
