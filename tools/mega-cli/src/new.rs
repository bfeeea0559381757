//! New command - create a project skeleton.

use anyhow::Result;
use clap::Args;
use mega_core::{scaffold, DockerImage, ToolchainKind};
use std::path::PathBuf;

use crate::project::send_one;

#[derive(Args)]
pub struct NewArgs {
    /// Project directory to create
    pub path: PathBuf,

    /// Toolchain for the new project (sgdk-gendev, marsdev, docker)
    #[arg(short, long, default_value = "sgdk-gendev")]
    pub toolchain: ToolchainKind,

    /// Docker image for docker projects (sgdk, doragasu)
    #[arg(long, default_value = "sgdk")]
    pub docker_image: DockerImage,

    /// Skip git repository initialization
    #[arg(long)]
    pub no_git: bool,
}

pub fn execute(args: NewArgs) -> Result<()> {
    let report = scaffold::create_project(&args.path, args.toolchain, args.docker_image)?;

    if report.created.is_empty() {
        println!(
            "Project at {} already complete, nothing to do.",
            args.path.display()
        );
        return Ok(());
    }

    println!("Created {} project at {}", args.toolchain, args.path.display());
    for path in &report.created {
        println!("  + {}", path.display());
    }
    if !report.skipped.is_empty() {
        println!(
            "  ({} existing entries left untouched)",
            report.skipped.len()
        );
    }

    if !args.no_git {
        send_one(
            &args.path,
            &format!("cd \"{}\" && git init", args.path.display()),
        )?;
    }

    println!();
    println!("Next: cd {} && mega build", args.path.display());
    Ok(())
}
