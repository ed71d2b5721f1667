//! Successful builds.

use std::fs;

use pretty_assertions::assert_eq;
use quillc::commands::build_with;
use quillc::{compile_file, emit_file};

use crate::common::{RecordingToolchain, Workspace};

const HELLO: &str = "var x = 5;\nprintf \"hello\";\n";

const HELLO_C: &str = "#include \"entries.h\"\n\
                       int main(int argc, char** argv) {\n\
                       \tint x = 5;\n\
                       \tprintf(\"hello\");\n\
                       \treturn 0;\n\
                       }\n";

#[test]
fn declaration_and_call_are_built() {
    let ws = Workspace::new(HELLO);
    let toolchain = RecordingToolchain::default();

    let artifact = compile_file(&ws.input, &ws.options(), &toolchain).unwrap();

    assert_eq!(artifact.emitted.c_source, HELLO_C);
    assert_eq!(artifact.emitted.path, ws.path("output.c"));
    assert_eq!(artifact.executable, ws.path("prog"));
    assert_eq!(fs::read_to_string(ws.path("output.c")).unwrap(), HELLO_C);

    let calls = toolchain.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].request.source, ws.path("output.c"));
    assert_eq!(calls[0].request.support, ws.path("entries.c"));
    assert_eq!(calls[0].request.output, ws.path("prog"));
    assert_eq!(calls[0].c_source, HELLO_C);
}

#[test]
fn emit_writes_without_building() {
    let ws = Workspace::new(HELLO);
    let emitted = emit_file(&ws.input, &ws.options()).unwrap();
    assert_eq!(emitted.c_source, HELLO_C);
    assert!(ws.path("output.c").exists());
    assert!(!ws.path("prog").exists());
}

#[test]
fn custom_header_is_included() {
    let ws = Workspace::new("printf \"hi\";");
    let mut options = ws.options();
    options.header = Some("builtins.h".into());
    let emitted = emit_file(&ws.input, &options).unwrap();
    assert!(emitted.c_source.starts_with("#include \"builtins.h\"\n"));
}

#[test]
fn build_echoes_generated_c_then_executable_path() {
    let ws = Workspace::new(HELLO);
    let toolchain = RecordingToolchain::default();
    let mut options = ws.options();
    options.quiet = false;

    let mut out = Vec::new();
    build_with(HELLO, &options, &toolchain, &mut out).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        format!("{HELLO_C}Executable path {}\n", ws.path("prog").display())
    );
}

#[test]
fn quiet_build_prints_only_executable_path() {
    let ws = Workspace::new(HELLO);
    let toolchain = RecordingToolchain::default();

    let mut out = Vec::new();
    build_with(HELLO, &ws.options(), &toolchain, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Executable path {}\n", ws.path("prog").display())
    );
}

#[test]
fn rebuild_overwrites_previous_output() {
    let ws = Workspace::new("var a = 1;");
    let toolchain = RecordingToolchain::default();
    compile_file(&ws.input, &ws.options(), &toolchain).unwrap();

    fs::write(&ws.input, "var b = 2.5;").unwrap();
    compile_file(&ws.input, &ws.options(), &toolchain).unwrap();

    let c = fs::read_to_string(ws.path("output.c")).unwrap();
    assert!(c.contains("\tfloat b = 2.5;\n"));
    assert!(!c.contains("int a"));
    assert_eq!(toolchain.call_count(), 2);
}
