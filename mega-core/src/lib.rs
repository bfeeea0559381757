//! Core library for the Mega Drive homebrew build tool.
//!
//! Everything the `mega` CLI does funnels through here:
//!
//! - [`config`] - layered `mega.toml` configuration (global + per-project)
//! - [`command`] - the [`command::CommandSink`] abstraction that receives
//!   generated shell command text
//! - [`toolchain`] - command construction for the three supported build
//!   toolchains (SGDK/GENDEV, Marsdev, Docker)
//! - [`dispatch`] - routing from a logical build action to toolchain
//!   command text
//! - [`scaffold`] - project skeleton creation
//! - [`tmx`] - Tiled map ingestion and C header generation
//!
//! The library never executes anything itself. It only builds command
//! text and hands it to a [`command::CommandSink`]; the CLI owns the
//! shell session that actually runs commands.

pub mod command;
pub mod config;
pub mod dispatch;
pub mod scaffold;
pub mod tmx;
pub mod toolchain;

pub use command::{CommandSink, RecordingSink};
pub use config::Config;
pub use dispatch::{DispatchError, Dispatcher};
pub use toolchain::{DockerImage, ToolchainKind};
