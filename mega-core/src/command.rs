//! Command sink abstraction.
//!
//! The dispatcher and toolchain strategies never run anything. They
//! produce shell command text and hand it to a [`CommandSink`]; the
//! concrete sink (a persistent shell session in the CLI, a recorder in
//! tests and `--dry-run`) owns execution. The only contract a sink has
//! to honor is call ordering.

/// Receives generated shell command text.
pub trait CommandSink {
    /// Send `text` to the sink.
    ///
    /// When `run_now` is true the line is submitted for immediate
    /// execution (a newline is appended). When false the text is left
    /// pending on the current line so a later send can extend it, which
    /// is how `build-then-run` chains commands with `&&`.
    fn send(&mut self, text: &str, run_now: bool);
}

/// A single command as it was handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCommand {
    pub text: String,
    pub run_now: bool,
}

/// Sink that records every send instead of executing.
///
/// Backs `--dry-run` and the dispatcher tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub sent: Vec<SentCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded sends joined the way a shell would see them:
    /// pending sends concatenate, `run_now` sends terminate a line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let mut pending = String::new();
        for cmd in &self.sent {
            pending.push_str(&cmd.text);
            if cmd.run_now {
                lines.push(std::mem::take(&mut pending));
            }
        }
        if !pending.is_empty() {
            lines.push(pending);
        }
        lines
    }
}

impl CommandSink for RecordingSink {
    fn send(&mut self, text: &str, run_now: bool) {
        self.sent.push(SentCommand {
            text: text.to_string(),
            run_now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_preserves_order() {
        let mut sink = RecordingSink::new();
        sink.send("export GENDEV=/opt/gendev", true);
        sink.send("make -f makefile.gen release", false);

        assert_eq!(sink.sent.len(), 2);
        assert_eq!(sink.sent[0].text, "export GENDEV=/opt/gendev");
        assert!(sink.sent[0].run_now);
        assert!(!sink.sent[1].run_now);
    }

    #[test]
    fn test_lines_concatenates_pending_sends() {
        let mut sink = RecordingSink::new();
        sink.send("make release", false);
        sink.send(" && ", false);
        sink.send("gens \"$PWD/out/rom.bin\" &", true);

        assert_eq!(
            sink.lines(),
            vec!["make release && gens \"$PWD/out/rom.bin\" &".to_string()]
        );
    }
}
