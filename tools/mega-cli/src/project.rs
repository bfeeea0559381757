//! Shared helpers for commands that act on a project directory.

use anyhow::Result;
use mega_core::{CommandSink, Config, DispatchError, Dispatcher, RecordingSink};
use std::path::{Path, PathBuf};

use crate::session::ShellSession;

/// Project directory: the `--project` argument or the current dir.
pub fn project_dir(arg: &Option<PathBuf>) -> PathBuf {
    arg.clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap())
}

/// Run a dispatcher action against the right sink.
///
/// `--dry-run` records the command lines and prints them; otherwise a
/// shell session executes them and is deactivated once the action's
/// text has been handed over.
pub fn with_dispatcher<F>(cfg: &Config, dir: &Path, dry_run: bool, action: F) -> Result<()>
where
    F: FnOnce(&mut Dispatcher<'_>) -> Result<(), DispatchError>,
{
    if dry_run {
        let mut sink = RecordingSink::new();
        action(&mut Dispatcher::new(cfg, &mut sink))?;
        println!("Would run in {}:", dir.display());
        for line in sink.lines() {
            println!("  $ {}", line);
        }
        return Ok(());
    }

    let mut session = ShellSession::spawn(dir)?;
    let result = action(&mut Dispatcher::new(cfg, &mut session));
    session.deactivate();
    result?;
    Ok(())
}

/// Send one line through a short-lived session (used for `git init`).
pub fn send_one(dir: &Path, line: &str) -> Result<()> {
    let mut session = ShellSession::spawn(dir)?;
    session.send(line, true);
    session.deactivate();
    Ok(())
}
