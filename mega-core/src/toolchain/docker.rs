//! Containerized SGDK builds.
//!
//! No host toolchain and no environment exports: the project directory
//! is bind-mounted into a published SGDK image and `make` runs inside
//! the container as the invoking user. Tag and mount point resolution
//! is pure so it can be tested without building any command.

use crate::command::CommandSink;
use crate::config::Config;
use crate::toolchain::DockerImage;

/// Image tag text for the `docker run` invocation.
///
/// A non-empty override wins verbatim, whatever the image type says.
pub fn image_tag(override_tag: &str, image: DockerImage) -> String {
    if !override_tag.is_empty() {
        return override_tag.to_string();
    }
    match image {
        DockerImage::Sgdk => "sgdk".to_string(),
        DockerImage::Doragasu => "-t registry.gitlab.com/doragasu/docker-sgdk".to_string(),
    }
}

/// Where the image expects the project mounted.
pub fn volume(image: DockerImage) -> &'static str {
    match image {
        DockerImage::Sgdk => "/src",
        DockerImage::Doragasu => "/m68k",
    }
}

pub fn clean(cfg: &Config, sink: &mut dyn CommandSink) {
    invoke(cfg, sink, true, "clean");
}

pub fn compile(cfg: &Config, sink: &mut dyn CommandSink, run_now: bool, target: &str) {
    invoke(cfg, sink, run_now, target);
}

fn invoke(cfg: &Config, sink: &mut dyn CommandSink, run_now: bool, args: &str) {
    let tag = image_tag(&cfg.docker_tag, cfg.docker_image);
    let vol = volume(cfg.docker_image);
    sink.send(
        &format!(
            "docker run --rm -v \"$PWD\":{} -u $(id -u):$(id -g) {} {}",
            vol, tag, args
        ),
        run_now,
    );
}
