//! Marsdev: native `make` against a Marsdev install.
//!
//! `MARSDEV` is exported unconditionally (Marsdev makefiles require it).
//! Unlike SGDK there is no default makefile: an empty configured path
//! means bare `make`, a set one is passed with `-f`. Marsdev compiles
//! always run `clean` first; incremental builds against its generated
//! boot objects are not reliable.

use crate::command::CommandSink;
use crate::config::Config;

pub fn clean(cfg: &Config, sink: &mut dyn CommandSink) {
    export_marsdev(cfg, sink);
    sink.send(&format!("make{} clean", makefile_flag(cfg)), true);
}

pub fn compile(cfg: &Config, sink: &mut dyn CommandSink, run_now: bool, target: &str) {
    export_marsdev(cfg, sink);
    sink.send(
        &format!("make{} clean {}", makefile_flag(cfg), target),
        run_now,
    );
}

fn export_marsdev(cfg: &Config, sink: &mut dyn CommandSink) {
    sink.send(&format!("export MARSDEV={}", cfg.marsdev_path), true);
}

/// ` -f <makefile>` when configured, empty otherwise.
fn makefile_flag(cfg: &Config) -> String {
    if cfg.makefile.is_empty() {
        String::new()
    } else {
        format!(" -f {}", cfg.makefile)
    }
}
