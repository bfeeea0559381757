//! Persistent shell session backing the command sink.
//!
//! One session per CLI invocation: a `sh` child with a piped stdin that
//! receives the dispatcher's command text in order. Submitted lines run
//! as they arrive; pending text stays on the current line until a later
//! send terminates it. Exit codes are not observed here - the shell's
//! own `&&` chaining is the only failure handling between chained
//! commands.

use anyhow::{Context, Result};
use mega_core::CommandSink;
use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Stdio};

pub struct ShellSession {
    child: Option<Child>,
}

impl ShellSession {
    /// Start a shell in `dir`.
    pub fn spawn(dir: &Path) -> Result<Self> {
        let child = Command::new("sh")
            .stdin(Stdio::piped())
            .current_dir(dir)
            .spawn()
            .context("Failed to start a shell session (is `sh` on PATH?)")?;
        Ok(Self { child: Some(child) })
    }

    /// Close the session, waiting for queued commands to finish.
    ///
    /// Idempotent: calling it again (or dropping after it) is a no-op.
    pub fn deactivate(&mut self) {
        if let Some(mut child) = self.child.take() {
            // Closing stdin ends the shell once queued commands finish
            drop(child.stdin.take());
            let _ = child.wait();
        }
    }
}

impl CommandSink for ShellSession {
    fn send(&mut self, text: &str, run_now: bool) {
        let Some(child) = self.child.as_mut() else {
            return;
        };
        let Some(stdin) = child.stdin.as_mut() else {
            return;
        };
        // The sink contract has no error channel; a dead shell just
        // drops the text and deactivate() reaps the child.
        let _ = stdin.write_all(text.as_bytes());
        if run_now {
            let _ = stdin.write_all(b"\n");
        }
        let _ = stdin.flush();
    }
}

impl Drop for ShellSession {
    fn drop(&mut self) {
        self.deactivate();
    }
}
