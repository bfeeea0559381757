//! Set-emulator command - record the emulator command globally.

use anyhow::{Context, Result};
use clap::Args;
use mega_core::config::global_config_path;
use mega_core::Config;

#[derive(Args)]
pub struct SetEmulatorArgs {
    /// Emulator executable (name on PATH or full path)
    pub command: String,
}

pub fn execute(args: SetEmulatorArgs) -> Result<()> {
    // Update the global scope only; project files are the user's
    let mut cfg = match global_config_path() {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Config::parse(&content)?
        }
        _ => Config::default(),
    };

    cfg.emulator = args.command.clone();
    let path = cfg.save_global()?;

    println!("Updated emulator command in {}", path.display());
    Ok(())
}
