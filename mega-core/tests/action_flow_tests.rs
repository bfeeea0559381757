//! End-to-end tests for action dispatch across all three toolchains.
//!
//! These exercise the full path a CLI invocation takes: parse a
//! mega.toml, build a dispatcher, and check the exact command text the
//! sink receives.

use mega_core::{Config, DispatchError, Dispatcher, RecordingSink};

fn dispatch(toml: &str) -> (Config, RecordingSink) {
    (Config::parse(toml).unwrap(), RecordingSink::new())
}

#[test]
fn test_clean_command_per_toolchain() {
    let (cfg, mut sink) = dispatch("toolchain = \"sgdk-gendev\"");
    Dispatcher::new(&cfg, &mut sink).clean().unwrap();
    assert_eq!(
        sink.lines(),
        vec!["make -f $GENDEV/sgdk/mkfiles/makefile.gen clean".to_string()]
    );

    let (cfg, mut sink) = dispatch("toolchain = \"marsdev\"");
    Dispatcher::new(&cfg, &mut sink).clean().unwrap();
    assert_eq!(
        sink.lines(),
        vec![
            "export MARSDEV=/opt/toolchains/mars".to_string(),
            "make clean".to_string(),
        ]
    );

    let (cfg, mut sink) = dispatch("toolchain = \"docker\"");
    Dispatcher::new(&cfg, &mut sink).clean().unwrap();
    assert_eq!(
        sink.lines(),
        vec!["docker run --rm -v \"$PWD\":/src -u $(id -u):$(id -g) sgdk clean".to_string()]
    );
}

#[test]
fn test_makefile_flag_selection() {
    // SGDK: empty path becomes the named default, always with -f
    let (cfg, mut sink) = dispatch("toolchain = \"sgdk-gendev\"");
    Dispatcher::new(&cfg, &mut sink).compile(true, "release").unwrap();
    assert!(sink.sent[0].text.contains("-f $GENDEV/sgdk/mkfiles/makefile.gen"));

    // Marsdev: empty path means no -f at all
    let (cfg, mut sink) = dispatch("toolchain = \"marsdev\"");
    Dispatcher::new(&cfg, &mut sink).compile(true, "release").unwrap();
    assert!(!sink.sent[1].text.contains("-f"));

    // Configured path is used exactly as given
    let (cfg, mut sink) = dispatch(
        "toolchain = \"marsdev\"\nmakefile = \"build/Makefile.md\"",
    );
    Dispatcher::new(&cfg, &mut sink).compile(true, "release").unwrap();
    assert!(sink.sent[1].text.contains("-f build/Makefile.md"));
}

#[test]
fn test_docker_tag_override_beats_image_type() {
    let (cfg, mut sink) = dispatch(
        r#"
toolchain = "docker"
docker_tag = "ghcr.io/me/sgdk:dev"
docker_image = "doragasu"
"#,
    );
    Dispatcher::new(&cfg, &mut sink).compile(true, "release").unwrap();

    let text = &sink.sent[0].text;
    assert!(text.contains(" ghcr.io/me/sgdk:dev "));
    assert!(!text.contains("doragasu/docker-sgdk"));
    // Volume still follows the image type
    assert!(text.contains("\"$PWD\":/m68k"));
}

#[test]
fn test_compile_and_run_chains_on_one_line() {
    let (cfg, mut sink) = dispatch("toolchain = \"docker\"\nemulator = \"blastem\"");
    Dispatcher::new(&cfg, &mut sink).compile_and_run().unwrap();

    assert_eq!(sink.sent.len(), 3);
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0],
        "docker run --rm -v \"$PWD\":/src -u $(id -u):$(id -g) sgdk release \
         && blastem \"$PWD/out/rom.bin\" &"
    );
}

#[test]
fn test_debug_gate_is_per_toolchain() {
    let (cfg, mut sink) = dispatch("toolchain = \"sgdk-gendev\"");
    let err = Dispatcher::new(&cfg, &mut sink).compile_for_debug().unwrap_err();
    assert!(matches!(err, DispatchError::DebugNotSupported { .. }));
    assert!(sink.sent.is_empty());

    for toml in ["toolchain = \"marsdev\"", "toolchain = \"docker\""] {
        let (cfg, mut sink) = dispatch(toml);
        Dispatcher::new(&cfg, &mut sink).compile_for_debug().unwrap();
        assert!(sink.sent.last().unwrap().text.ends_with("debug"));
    }
}
