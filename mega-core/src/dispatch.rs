//! Routing from logical build actions to toolchain command text.
//!
//! The dispatcher is the only place that branches on
//! [`ToolchainKind`]; the match is exhaustive, so adding a toolchain
//! without wiring every action is a compile error. Configuration is an
//! explicit field, never ambient state, and every action resolves it,
//! builds its command text, and hands it to the sink before returning.

use crate::command::CommandSink;
use crate::config::{Config, DEFAULT_COMPILE_TARGET};
use crate::toolchain::{docker, marsdev, sgdk, ToolchainKind};

/// Action-level failures, detected before any command is sent.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DispatchError {
    #[error(
        "toolchain {toolchain} cannot compile for debugging on this platform; \
         switch to marsdev or docker in mega.toml"
    )]
    DebugNotSupported { toolchain: ToolchainKind },
}

/// Dispatches logical actions onto the configured toolchain.
pub struct Dispatcher<'a> {
    config: &'a Config,
    sink: &'a mut dyn CommandSink,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a Config, sink: &'a mut dyn CommandSink) -> Self {
        Self { config, sink }
    }

    /// Remove build artifacts.
    pub fn clean(&mut self) -> Result<(), DispatchError> {
        match self.config.toolchain {
            ToolchainKind::SgdkGendev => sgdk::clean(self.config, self.sink),
            ToolchainKind::MarsDev => marsdev::clean(self.config, self.sink),
            ToolchainKind::Docker => docker::clean(self.config, self.sink),
        }
        Ok(())
    }

    /// Build the ROM.
    ///
    /// `run_now = false` leaves the command pending on the line so a
    /// follow-up send can chain onto it (see [`Self::compile_and_run`]).
    pub fn compile(&mut self, run_now: bool, target: &str) -> Result<(), DispatchError> {
        match self.config.toolchain {
            ToolchainKind::SgdkGendev => sgdk::compile(self.config, self.sink, run_now, target),
            ToolchainKind::MarsDev => marsdev::compile(self.config, self.sink, run_now, target),
            ToolchainKind::Docker => docker::compile(self.config, self.sink, run_now, target),
        }
        Ok(())
    }

    /// Launch the emulator against the built ROM, backgrounded so the
    /// session stays usable.
    pub fn run(&mut self, run_now: bool) -> Result<(), DispatchError> {
        let rom = self.rom_path();
        self.sink.send(
            &format!("{} \"{}\" &", self.config.emulator_command(), rom),
            run_now,
        );
        Ok(())
    }

    /// Build, then launch, chained with the shell's `&&`.
    ///
    /// The chain is one line: the compile send stays pending, the
    /// separator extends it, the run send submits it. Whether the run
    /// half executes after a failed compile is the shell's `&&`
    /// short-circuit, not anything this layer checks; no exit status is
    /// observed here.
    pub fn compile_and_run(&mut self) -> Result<(), DispatchError> {
        self.compile(false, DEFAULT_COMPILE_TARGET)?;
        self.sink.send(" && ", false);
        self.run(true)
    }

    /// Build with debug symbols.
    ///
    /// SGDK/GENDEV has no debug build on this platform; the action is
    /// rejected before anything reaches the sink.
    pub fn compile_for_debug(&mut self) -> Result<(), DispatchError> {
        if self.config.toolchain == ToolchainKind::SgdkGendev {
            return Err(DispatchError::DebugNotSupported {
                toolchain: ToolchainKind::SgdkGendev,
            });
        }
        self.compile(true, "debug")
    }

    /// Marsdev drops `rom.bin` at the project root; SGDK-based
    /// toolchains put it under `out/`.
    fn rom_path(&self) -> &'static str {
        match self.config.toolchain {
            ToolchainKind::MarsDev => "$PWD/rom.bin",
            ToolchainKind::SgdkGendev | ToolchainKind::Docker => "$PWD/out/rom.bin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::RecordingSink;

    fn config(toml: &str) -> Config {
        Config::parse(toml).unwrap()
    }

    #[test]
    fn test_clean_routes_to_configured_toolchain() {
        let cfg = config("toolchain = \"docker\"");
        let mut sink = RecordingSink::new();
        Dispatcher::new(&cfg, &mut sink).clean().unwrap();

        assert!(sink.sent[0].text.starts_with("docker run --rm"));
    }

    #[test]
    fn test_run_rom_path_marsdev() {
        let cfg = config("toolchain = \"marsdev\"");
        let mut sink = RecordingSink::new();
        Dispatcher::new(&cfg, &mut sink).run(true).unwrap();

        assert_eq!(sink.sent[0].text, "gens \"$PWD/rom.bin\" &");
    }

    #[test]
    fn test_run_rom_path_other_toolchains() {
        for toml in ["toolchain = \"sgdk-gendev\"", "toolchain = \"docker\""] {
            let cfg = config(toml);
            let mut sink = RecordingSink::new();
            Dispatcher::new(&cfg, &mut sink).run(true).unwrap();

            assert_eq!(sink.sent[0].text, "gens \"$PWD/out/rom.bin\" &");
        }
    }

    #[test]
    fn test_run_uses_configured_emulator() {
        let cfg = config("emulator = \"blastem\"");
        let mut sink = RecordingSink::new();
        Dispatcher::new(&cfg, &mut sink).run(false).unwrap();

        assert_eq!(sink.sent[0].text, "blastem \"$PWD/out/rom.bin\" &");
        assert!(!sink.sent[0].run_now);
    }

    #[test]
    fn test_compile_and_run_send_ordering() {
        // Docker emits no env export, so the whole chain is exactly
        // three sends: compile (pending), separator, run (submitted).
        let cfg = config("toolchain = \"docker\"");
        let mut sink = RecordingSink::new();
        Dispatcher::new(&cfg, &mut sink).compile_and_run().unwrap();

        assert_eq!(sink.sent.len(), 3);
        assert!(sink.sent[0].text.ends_with(" release"));
        assert!(!sink.sent[0].run_now);
        assert_eq!(sink.sent[1].text, " && ");
        assert!(!sink.sent[1].run_now);
        assert_eq!(sink.sent[2].text, "gens \"$PWD/out/rom.bin\" &");
        assert!(sink.sent[2].run_now);
    }

    #[test]
    fn test_compile_and_run_is_one_shell_line() {
        let cfg = config("toolchain = \"docker\"");
        let mut sink = RecordingSink::new();
        Dispatcher::new(&cfg, &mut sink).compile_and_run().unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" && gens "));
    }

    #[test]
    fn test_compile_and_run_keeps_env_export_separate() {
        // Marsdev exports MARSDEV as its own submitted line before the
        // chained compile/run line.
        let cfg = config("toolchain = \"marsdev\"");
        let mut sink = RecordingSink::new();
        Dispatcher::new(&cfg, &mut sink).compile_and_run().unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("export MARSDEV="));
        assert!(lines[1].starts_with("make clean release && "));
    }

    #[test]
    fn test_debug_rejected_on_sgdk_gendev_before_any_send() {
        let cfg = config("toolchain = \"sgdk-gendev\"");
        let mut sink = RecordingSink::new();
        let err = Dispatcher::new(&cfg, &mut sink)
            .compile_for_debug()
            .unwrap_err();

        assert!(matches!(err, DispatchError::DebugNotSupported { .. }));
        assert!(sink.sent.is_empty());
    }

    #[test]
    fn test_debug_routes_to_compile_on_other_toolchains() {
        let cfg = config("toolchain = \"docker\"");
        let mut sink = RecordingSink::new();
        Dispatcher::new(&cfg, &mut sink).compile_for_debug().unwrap();

        assert_eq!(sink.sent.len(), 1);
        assert!(sink.sent[0].text.ends_with(" debug"));
        assert!(sink.sent[0].run_now);
    }
}
