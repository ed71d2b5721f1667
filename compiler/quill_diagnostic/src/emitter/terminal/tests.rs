use super::*;
use crate::ErrorCode;
use quill_ir::Span;

fn render(diag: &Diagnostic, source: Option<&str>) -> String {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    if let Some(source) = source {
        emitter = emitter.with_source(source).with_file_path("demo.qs");
    }
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_header_and_notes_without_source() {
    let diag = Diagnostic::error(ErrorCode::E5001)
        .with_message("C toolchain failed")
        .with_note("cc exited with status 1");
    let text = render(&diag, None);
    assert!(text.starts_with("error[E5001]: C toolchain failed\n"));
    assert!(text.contains("  = note: cc exited with status 1"));
}

#[test]
fn test_label_without_source_uses_byte_offsets() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected token")
        .with_label(Span::new(4, 5), "here");
    let text = render(&diag, None);
    assert!(text.contains("--> 4..5: here"), "got:\n{text}");
}

#[test]
fn test_snippet_single_line() {
    // Line 2 starts at byte 11; `"hello` spans 19..25 (col 9)
    let source = "var x = 1;\nvar y = \"hello";
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("unterminated string literal")
        .with_label(Span::new(19, 25), "string starts here");
    let text = render(&diag, Some(source));

    assert!(text.contains("--> demo.qs:2:9"), "got:\n{text}");
    assert!(text.contains("2 | var y = \"hello"), "got:\n{text}");
    assert!(text.contains("^^^^^^ string starts here"), "got:\n{text}");
    assert!(!text.contains("19..25"), "got:\n{text}");
}

#[test]
fn test_snippet_point_span_renders_one_caret() {
    let source = "var x = 1;";
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("unexpected end of input")
        .with_label(Span::point(10), "input ends here");
    let text = render(&diag, Some(source));
    assert!(text.contains("--> demo.qs:1:11"), "got:\n{text}");
    assert!(text.contains("^ input ends here"), "got:\n{text}");
}

#[test]
fn test_colors_wrap_error_header() {
    let diag = Diagnostic::error(ErrorCode::E0002).with_message("unexpected character");
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);
    emitter.emit(&diag);
    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("\x1b[1;31merror\x1b[0m"), "got:\n{text:?}");
}
