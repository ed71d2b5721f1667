//! Failures abort the pipeline at the phase that detected them.

use std::fs;

use quill_diagnostic::ErrorCode;
use quill_lexer::LexErrorKind;
use quillc::commands::build_with;
use quillc::{compile_file, BuildError, CompileError};

use crate::common::{ClosedPipe, RecordingToolchain, Workspace};

fn compile(source: &str) -> (Workspace, RecordingToolchain, CompileError) {
    let ws = Workspace::new(source);
    let toolchain = RecordingToolchain::default();
    let err = compile_file(&ws.input, &ws.options(), &toolchain).unwrap_err();
    (ws, toolchain, err)
}

#[test]
fn unterminated_string_writes_no_file() {
    let (ws, toolchain, err) = compile("var x = \"hello");
    match &err {
        CompileError::Lex(lex) => {
            assert_eq!(lex.kind, LexErrorKind::UnterminatedString);
            assert_eq!((lex.line, lex.column), (1, 9));
        }
        other => panic!("expected a lex error, got {other:?}"),
    }
    assert!(!ws.path("output.c").exists());
    assert_eq!(toolchain.call_count(), 0);
}

#[test]
fn unterminated_native_writes_no_file() {
    let (ws, toolchain, err) = compile("var x = 1;\n`x++;");
    assert_eq!(err.to_diagnostic().code, ErrorCode::E0004);
    assert!(!ws.path("output.c").exists());
    assert_eq!(toolchain.call_count(), 0);
}

#[test]
fn doubled_decimal_point_writes_no_file() {
    let (ws, toolchain, err) = compile("var v = 1.2.3;");
    assert_eq!(err.to_diagnostic().code, ErrorCode::E0003);
    assert!(!ws.path("output.c").exists());
    assert_eq!(toolchain.call_count(), 0);
}

#[test]
fn unexpected_character_writes_no_file() {
    let (ws, _, err) = compile("var x = 1 + 2;");
    assert_eq!(err.to_diagnostic().code, ErrorCode::E0002);
    assert!(!ws.path("output.c").exists());
}

#[test]
fn parse_error_writes_no_file() {
    let (ws, toolchain, err) = compile("var x = 5;\nx = 6;");
    match &err {
        CompileError::Parse(parse) => {
            assert_eq!(parse.code, ErrorCode::E1001);
            assert_eq!(parse.token.as_deref(), Some("x"));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
    assert!(!ws.path("output.c").exists());
    assert_eq!(toolchain.call_count(), 0);
}

#[test]
fn missing_input_is_a_read_error() {
    let ws = Workspace::new("");
    let toolchain = RecordingToolchain::default();
    let err = compile_file(&ws.path("nope.qs"), &ws.options(), &toolchain).unwrap_err();
    assert!(matches!(err, CompileError::Read { .. }));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E5003);
}

#[test]
fn unwritable_output_is_a_write_error() {
    let ws = Workspace::new("var x = 1;");
    let toolchain = RecordingToolchain::default();
    let mut options = ws.options();
    options.emit_to = Some(ws.path("missing-dir/output.c"));
    let err = compile_file(&ws.input, &options, &toolchain).unwrap_err();
    assert!(matches!(err, CompileError::Write { .. }));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E5002);
    assert_eq!(toolchain.call_count(), 0);
}

#[test]
fn toolchain_failure_keeps_generated_file() {
    let ws = Workspace::new("var x = 1;");
    let toolchain = RecordingToolchain::failing(BuildError::BuildFailed {
        program: "cc".into(),
        exit_code: Some(1),
        stderr: "output.c: error".into(),
        command: "cc output.c entries.c".into(),
    });
    let err = compile_file(&ws.input, &ws.options(), &toolchain).unwrap_err();
    assert!(matches!(err, CompileError::Build(BuildError::BuildFailed { .. })));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E5001);
    assert!(fs::read_to_string(ws.path("output.c"))
        .unwrap()
        .contains("int x = 1;"));
    assert_eq!(toolchain.call_count(), 1);
}

#[test]
fn closed_stdout_stops_before_the_toolchain() {
    let ws = Workspace::new("var x = 5;");
    let toolchain = RecordingToolchain::default();
    let mut options = ws.options();
    options.quiet = false;

    let err = build_with("var x = 5;", &options, &toolchain, &mut ClosedPipe).unwrap_err();

    assert!(matches!(err, CompileError::Output { .. }));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E5002);
    assert_eq!(toolchain.call_count(), 0);
}

#[test]
fn closed_stdout_after_quiet_build_is_reported() {
    let ws = Workspace::new("var x = 5;");
    let toolchain = RecordingToolchain::default();

    let err = build_with("var x = 5;", &ws.options(), &toolchain, &mut ClosedPipe).unwrap_err();

    assert!(matches!(err, CompileError::Output { .. }));
    assert_eq!(toolchain.call_count(), 1);
}
