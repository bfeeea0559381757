//! Toolchain identifiers and per-toolchain command construction.
//!
//! Three interchangeable toolchains can build a Mega Drive ROM:
//!
//! - [`sgdk`] - SGDK on a GENDEV install (native `make`, `GENDEV` env)
//! - [`marsdev`] - Marsdev (native `make`, `MARSDEV` env)
//! - [`docker`] - a containerized SGDK image (no host toolchain at all)
//!
//! Each module exposes `clean` and `compile` routines that emit command
//! text to a [`crate::command::CommandSink`]. Dispatch over the
//! toolchain kind lives in [`crate::dispatch`].

pub mod docker;
pub mod marsdev;
pub mod sgdk;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which toolchain builds the project.
///
/// There is no implicit toolchain: the default is an explicit
/// `SgdkGendev` so a fresh configuration always names one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolchainKind {
    #[default]
    #[serde(rename = "sgdk-gendev")]
    SgdkGendev,
    #[serde(rename = "marsdev")]
    MarsDev,
    #[serde(rename = "docker")]
    Docker,
}

impl ToolchainKind {
    pub const ALL: [ToolchainKind; 3] = [
        ToolchainKind::SgdkGendev,
        ToolchainKind::MarsDev,
        ToolchainKind::Docker,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolchainKind::SgdkGendev => "sgdk-gendev",
            ToolchainKind::MarsDev => "marsdev",
            ToolchainKind::Docker => "docker",
        }
    }
}

impl fmt::Display for ToolchainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized toolchain or docker image name.
///
/// Surfacing this at parse time (instead of a silent no-op later) is
/// what makes a misconfigured `mega.toml` diagnosable.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {what} \"{value}\" (expected one of: {expected})")]
pub struct UnknownNameError {
    pub what: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for ToolchainKind {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sgdk-gendev" => Ok(ToolchainKind::SgdkGendev),
            "marsdev" => Ok(ToolchainKind::MarsDev),
            "docker" => Ok(ToolchainKind::Docker),
            other => Err(UnknownNameError {
                what: "toolchain",
                value: other.to_string(),
                expected: "sgdk-gendev, marsdev, docker",
            }),
        }
    }
}

/// Which published SGDK container image the Docker toolchain uses.
///
/// Only meaningful when the toolchain is [`ToolchainKind::Docker`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DockerImage {
    #[default]
    #[serde(rename = "sgdk")]
    Sgdk,
    #[serde(rename = "doragasu")]
    Doragasu,
}

impl DockerImage {
    pub fn as_str(&self) -> &'static str {
        match self {
            DockerImage::Sgdk => "sgdk",
            DockerImage::Doragasu => "doragasu",
        }
    }
}

impl fmt::Display for DockerImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DockerImage {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sgdk" => Ok(DockerImage::Sgdk),
            "doragasu" => Ok(DockerImage::Doragasu),
            other => Err(UnknownNameError {
                what: "docker image",
                value: other.to_string(),
                expected: "sgdk, doragasu",
            }),
        }
    }
}
