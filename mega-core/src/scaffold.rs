//! Project skeleton creation.
//!
//! Creates the canonical Mega Drive project layout and seeds template
//! files. Idempotent: every file and directory is gated on existence,
//! so re-running `mega new` over a project never overwrites anything
//! the user has edited. Marsdev projects additionally get a makefile
//! and the `boot/` assembly pair its link step expects; version control
//! init goes through the command sink and is the CLI's job.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::{Config, PROJECT_CONFIG};
use crate::toolchain::{DockerImage, ToolchainKind};

const GITIGNORE: &str = include_str!("../templates/gitignore.template");
const README: &str = include_str!("../templates/README.md.template");
const MAIN_C: &str = include_str!("../templates/main.c.template");
const MAKEFILE: &str = include_str!("../templates/Makefile.template");
const BOOT_SEGA_S: &str = include_str!("../templates/sega.s.template");
const BOOT_ROM_HEAD: &str = include_str!("../templates/rom_head.c.template");

/// What a scaffolding pass did, entry by entry.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Create (or complete) a project skeleton at `root`.
///
/// `docker_image` is recorded in the starter config; it only matters
/// once the project builds with the Docker toolchain.
pub fn create_project(
    root: &Path,
    toolchain: ToolchainKind,
    docker_image: DockerImage,
) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    ensure_dir(root, &mut report)?;
    ensure_dir(&root.join("src"), &mut report)?;
    ensure_dir(&root.join("inc"), &mut report)?;
    ensure_dir(&root.join("res"), &mut report)?;

    // Empty markers so src-less directories survive a git checkout
    seed_file(&root.join("inc/.gitkeep"), "", &mut report)?;
    seed_file(&root.join("res/.gitkeep"), "", &mut report)?;

    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "mega-project".to_string());
    seed_file(
        &root.join("README.md"),
        &README.replace("{{PROJECT_NAME}}", &name),
        &mut report,
    )?;
    seed_file(&root.join(".gitignore"), GITIGNORE, &mut report)?;
    seed_file(&root.join("src/main.c"), MAIN_C, &mut report)?;

    if toolchain == ToolchainKind::MarsDev {
        ensure_dir(&root.join("boot"), &mut report)?;
        seed_file(&root.join("Makefile"), MAKEFILE, &mut report)?;
        seed_file(&root.join("boot/sega.s"), BOOT_SEGA_S, &mut report)?;
        seed_file(&root.join("boot/rom_head.c"), BOOT_ROM_HEAD, &mut report)?;
    }

    // Starter config recording the chosen toolchain
    let config_path = root.join(PROJECT_CONFIG);
    if !config_path.exists() {
        let cfg = Config {
            toolchain,
            docker_image,
            ..Config::default()
        };
        let content = toml::to_string_pretty(&cfg).context("Failed to serialize mega.toml")?;
        seed_file(&config_path, &content, &mut report)?;
    } else {
        report.skipped.push(config_path);
    }

    Ok(report)
}

fn ensure_dir(path: &Path, report: &mut ScaffoldReport) -> Result<()> {
    if path.exists() {
        report.skipped.push(path.to_path_buf());
    } else {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        report.created.push(path.to_path_buf());
    }
    Ok(())
}

fn seed_file(path: &Path, contents: &str, report: &mut ScaffoldReport) -> Result<()> {
    if path.exists() {
        report.skipped.push(path.to_path_buf());
    } else {
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write: {}", path.display()))?;
        report.created.push(path.to_path_buf());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_canonical_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("my-game");

        let report = create_project(&root, ToolchainKind::SgdkGendev, DockerImage::Sgdk).unwrap();

        assert!(root.join("src/main.c").exists());
        assert!(root.join("inc/.gitkeep").exists());
        assert!(root.join("res/.gitkeep").exists());
        assert!(root.join("README.md").exists());
        assert!(root.join(".gitignore").exists());
        assert!(root.join("mega.toml").exists());
        // No marsdev extras for SGDK projects
        assert!(!root.join("boot").exists());
        assert!(!root.join("Makefile").exists());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_marsdev_gets_boot_and_makefile() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("mars-game");

        create_project(&root, ToolchainKind::MarsDev, DockerImage::Sgdk).unwrap();

        assert!(root.join("Makefile").exists());
        assert!(root.join("boot/sega.s").exists());
        assert!(root.join("boot/rom_head.c").exists());

        let cfg = Config::load_merged(&root).unwrap();
        assert_eq!(cfg.toolchain, ToolchainKind::MarsDev);
    }

    #[test]
    fn test_docker_image_choice_lands_in_config() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("docker-game");

        create_project(&root, ToolchainKind::Docker, DockerImage::Doragasu).unwrap();

        let cfg = Config::load_merged(&root).unwrap();
        assert_eq!(cfg.toolchain, ToolchainKind::Docker);
        assert_eq!(cfg.docker_image, DockerImage::Doragasu);
    }

    #[test]
    fn test_rerun_never_overwrites_user_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("game");

        create_project(&root, ToolchainKind::SgdkGendev, DockerImage::Sgdk).unwrap();

        // User edits their main.c
        let main_c = root.join("src/main.c");
        std::fs::write(&main_c, "// my game\n").unwrap();

        let second = create_project(&root, ToolchainKind::SgdkGendev, DockerImage::Sgdk).unwrap();

        assert!(second.created.is_empty());
        assert_eq!(std::fs::read_to_string(&main_c).unwrap(), "// my game\n");
    }

    #[test]
    fn test_fills_in_missing_pieces_only() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("game");

        create_project(&root, ToolchainKind::SgdkGendev, DockerImage::Sgdk).unwrap();
        std::fs::remove_file(root.join(".gitignore")).unwrap();

        let report = create_project(&root, ToolchainKind::SgdkGendev, DockerImage::Sgdk).unwrap();
        assert_eq!(report.created, vec![root.join(".gitignore")]);
        assert!(root.join(".gitignore").exists());
    }

    #[test]
    fn test_readme_names_the_project() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("sonic-clone");

        create_project(&root, ToolchainKind::SgdkGendev, DockerImage::Sgdk).unwrap();

        let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
        assert!(readme.starts_with("# sonic-clone"));
    }
}
