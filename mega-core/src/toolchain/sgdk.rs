//! SGDK on GENDEV: native `make` against the SGDK makefile.
//!
//! When a GENDEV path is configured it is exported first, as its own
//! immediately-run command, so the shell applies the environment before
//! `make` starts. The makefile is always passed with `-f`; an empty
//! configured path falls back to the makefile SGDK ships in GENDEV.

use crate::command::CommandSink;
use crate::config::Config;

pub fn clean(cfg: &Config, sink: &mut dyn CommandSink) {
    export_gendev(cfg, sink);
    sink.send(&format!("make -f {} clean", cfg.sgdk_makefile()), true);
}

pub fn compile(cfg: &Config, sink: &mut dyn CommandSink, run_now: bool, target: &str) {
    export_gendev(cfg, sink);
    sink.send(&format!("make -f {} {}", cfg.sgdk_makefile(), target), run_now);
}

/// Export `GENDEV` only when a path is configured.
fn export_gendev(cfg: &Config, sink: &mut dyn CommandSink) {
    if !cfg.gendev_path.is_empty() {
        sink.send(&format!("export GENDEV={}", cfg.gendev_path), true);
    }
}
