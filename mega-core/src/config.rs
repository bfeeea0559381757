//! Layered `mega.toml` configuration.
//!
//! Two scopes, merged in order: a global file under the user config
//! directory, then a per-project `mega.toml` whose set fields win.
//! String fields use the empty string for "not set"; accessors resolve
//! the documented default, the raw struct never carries a null.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::toolchain::{DockerImage, ToolchainKind};

/// Per-project configuration file name.
pub const PROJECT_CONFIG: &str = "mega.toml";

/// Makefile SGDK ships inside a GENDEV install; used whenever no
/// makefile is configured for the SGDK/GENDEV toolchain.
pub const DEFAULT_SGDK_MAKEFILE: &str = "$GENDEV/sgdk/mkfiles/makefile.gen";

/// Build target appended to `make` when the user gives none.
pub const DEFAULT_COMPILE_TARGET: &str = "release";

/// Emulator launched by `mega run` when none is configured.
pub const DEFAULT_EMULATOR: &str = "gens";

/// Conventional Marsdev install prefix, exported as `MARSDEV`.
pub const DEFAULT_MARSDEV_PATH: &str = "/opt/toolchains/mars";

/// Resolved tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Active toolchain. Always explicit; a fresh config is SGDK/GENDEV.
    pub toolchain: ToolchainKind,
    /// Makefile passed to `make -f`. Empty = toolchain default.
    pub makefile: String,
    /// Exported as `GENDEV` before SGDK invocations. Empty = no export.
    pub gendev_path: String,
    /// Exported as `MARSDEV` before Marsdev invocations.
    pub marsdev_path: String,
    /// Emulator executable for `mega run`. Empty = `gens`.
    pub emulator: String,
    /// Verbatim docker image tag. Empty = resolve from `docker_image`.
    pub docker_tag: String,
    /// Published SGDK image variant for the Docker toolchain.
    pub docker_image: DockerImage,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toolchain: ToolchainKind::default(),
            makefile: String::new(),
            gendev_path: String::new(),
            marsdev_path: DEFAULT_MARSDEV_PATH.to_string(),
            emulator: String::new(),
            docker_tag: String::new(),
            docker_image: DockerImage::default(),
        }
    }
}

/// On-disk form: every field optional so a file only overrides what it
/// actually names.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    toolchain: Option<ToolchainKind>,
    makefile: Option<String>,
    gendev_path: Option<String>,
    marsdev_path: Option<String>,
    emulator: Option<String>,
    docker_tag: Option<String>,
    docker_image: Option<DockerImage>,
}

impl Config {
    /// Parse a single config file from a string.
    pub fn parse(content: &str) -> Result<Self> {
        let mut cfg = Config::default();
        cfg.apply_str(content)?;
        Ok(cfg)
    }

    /// Load defaults, then the global file, then the project file.
    pub fn load_merged(project_dir: &Path) -> Result<Self> {
        let mut cfg = Config::default();

        if let Some(global) = global_config_path() {
            if global.exists() {
                let content = std::fs::read_to_string(&global).with_context(|| {
                    format!("Failed to read global config: {}", global.display())
                })?;
                cfg.apply_str(&content)
                    .with_context(|| format!("Failed to parse {}", global.display()))?;
            }
        }

        let project = project_dir.join(PROJECT_CONFIG);
        if project.exists() {
            let content = std::fs::read_to_string(&project)
                .with_context(|| format!("Failed to read {}", project.display()))?;
            cfg.apply_str(&content)
                .with_context(|| format!("Failed to parse {}", project.display()))?;
        }

        Ok(cfg)
    }

    /// Write this config to the global scope, creating the config
    /// directory on first use.
    pub fn save_global(&self) -> Result<PathBuf> {
        let path = global_config_path()
            .context("Could not determine a user config directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Overlay one config file onto this config.
    fn apply_str(&mut self, content: &str) -> Result<()> {
        let file: ConfigFile = toml::from_str(content).context("Invalid mega.toml")?;
        self.apply(file);
        Ok(())
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(v) = file.toolchain {
            self.toolchain = v;
        }
        if let Some(v) = file.makefile {
            self.makefile = v;
        }
        if let Some(v) = file.gendev_path {
            self.gendev_path = v;
        }
        if let Some(v) = file.marsdev_path {
            self.marsdev_path = v;
        }
        if let Some(v) = file.emulator {
            self.emulator = v;
        }
        if let Some(v) = file.docker_tag {
            self.docker_tag = v;
        }
        if let Some(v) = file.docker_image {
            self.docker_image = v;
        }
    }

    /// Makefile for the SGDK/GENDEV toolchain, with the GENDEV default.
    pub fn sgdk_makefile(&self) -> &str {
        if self.makefile.is_empty() {
            DEFAULT_SGDK_MAKEFILE
        } else {
            &self.makefile
        }
    }

    /// Emulator executable, defaulted.
    pub fn emulator_command(&self) -> &str {
        if self.emulator.is_empty() {
            DEFAULT_EMULATOR
        } else {
            &self.emulator
        }
    }
}

/// Path of the global config file (`mega.toml` in the user config dir).
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "megatools", "mega")
        .map(|dirs| dirs.config_dir().join(PROJECT_CONFIG))
}
