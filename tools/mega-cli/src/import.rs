//! Import command - convert a Tiled map into a C header under res/.

use anyhow::{Context, Result};
use clap::Args;
use mega_core::tmx::{self, header};
use std::path::PathBuf;

use crate::project::project_dir;

#[derive(Args)]
pub struct ImportArgs {
    /// Tile map file (.tmx, .json or .tmj)
    pub file: PathBuf,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Output directory, relative to the project
    #[arg(long, default_value = "res")]
    pub out: PathBuf,

    /// Custom header template (defaults to the built-in one)
    #[arg(long)]
    pub template: Option<PathBuf>,
}

pub fn execute(args: ImportArgs) -> Result<()> {
    let dir = project_dir(&args.project);
    let doc = tmx::parse_file(&args.file)?;

    let template = match &args.template {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template: {}", path.display()))?,
        None => header::DEFAULT_TEMPLATE.to_string(),
    };

    let out_dir = dir.join(&args.out);
    let header_path = tmx::write_header(&doc, &out_dir, &template)?;

    println!(
        "Imported {} ({}x{} tiles, {} layers)",
        args.file.display(),
        doc.width,
        doc.height,
        doc.layers.len()
    );
    println!("  Header: {}", header_path.display());
    Ok(())
}
