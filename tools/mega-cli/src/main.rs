//! Mega CLI - Build tool for Sega Mega Drive / Genesis homebrew
//!
//! # Commands
//!
//! - `mega new` - Create a new project skeleton
//! - `mega clean` - Remove build artifacts
//! - `mega build` - Compile the ROM
//! - `mega run` - Compile and launch in the emulator
//! - `mega debug` - Compile with debug symbols
//! - `mega import-tmx` - Convert a Tiled map into a C header
//! - `mega set-emulator` - Record the emulator command globally
//!
//! # Usage
//!
//! In a project directory with mega.toml:
//! ```bash
//! # Build the ROM with the configured toolchain
//! mega build
//!
//! # Build and launch the emulator
//! mega run
//!
//! # See what would be executed without running anything
//! mega build --dry-run
//! ```
//!
//! # Configuration (mega.toml)
//!
//! ```toml
//! # One of: sgdk-gendev, marsdev, docker
//! toolchain = "sgdk-gendev"
//!
//! # Optional overrides (empty string = use the default)
//! makefile = ""
//! gendev_path = "/opt/gendev"
//! emulator = "gens"
//!
//! # Docker toolchain only
//! docker_tag = ""
//! docker_image = "sgdk"
//! ```
//!
//! A global mega.toml in the user config directory supplies defaults;
//! per-project values win.

mod build;
mod clean;
mod debug;
mod import;
mod new;
mod project;
mod run;
mod session;
mod set_emulator;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Mega CLI - Build tool for Sega Mega Drive / Genesis homebrew
#[derive(Parser)]
#[command(name = "mega")]
#[command(about = "Build tool for Sega Mega Drive / Genesis homebrew")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project skeleton
    New(new::NewArgs),

    /// Remove build artifacts
    Clean(clean::CleanArgs),

    /// Compile the ROM
    Build(build::BuildArgs),

    /// Compile and launch in the emulator
    Run(run::RunArgs),

    /// Compile with debug symbols (marsdev and docker only)
    Debug(debug::DebugArgs),

    /// Convert a Tiled map (.tmx / .json) into a C header under res/
    #[command(name = "import-tmx")]
    ImportTmx(import::ImportArgs),

    /// Record the emulator command in the global configuration
    #[command(name = "set-emulator")]
    SetEmulator(set_emulator::SetEmulatorArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New(args) => new::execute(args),
        Commands::Clean(args) => clean::execute(args),
        Commands::Build(args) => build::execute(args),
        Commands::Run(args) => run::execute(args),
        Commands::Debug(args) => debug::execute(args),
        Commands::ImportTmx(args) => import::execute(args),
        Commands::SetEmulator(args) => set_emulator::execute(args),
    }
}
