use super::*;
use crate::lex_error::LexErrorKind;
use pretty_assertions::assert_eq;

fn kinds_and_values(source: &str) -> Vec<(TokenKind, String)> {
    Scanner::new(source)
        .map(|t| {
            let t = t.unwrap();
            (t.kind, t.value)
        })
        .collect()
}

fn lex_err(source: &str) -> LexError {
    Scanner::new(source)
        .find_map(Result::err)
        .expect("expected a lex error")
}

#[test]
fn test_declaration() {
    assert_eq!(
        kinds_and_values("var x = 5;"),
        vec![
            (TokenKind::Keyword, "var".into()),
            (TokenKind::Identifier, "x".into()),
            (TokenKind::Assignment, "=".into()),
            (TokenKind::Integer, "5".into()),
            (TokenKind::Eol, ";".into()),
        ]
    );
}

#[test]
fn test_call_with_string_argument() {
    assert_eq!(
        kinds_and_values("printf \"hello world\";"),
        vec![
            (TokenKind::Function, "printf".into()),
            (TokenKind::String, "hello world".into()),
            (TokenKind::Eol, ";".into()),
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds_and_values("42 3.14 .5 7."),
        vec![
            (TokenKind::Integer, "42".into()),
            (TokenKind::Float, "3.14".into()),
            (TokenKind::Float, ".5".into()),
            (TokenKind::Float, "7.".into()),
        ]
    );
}

#[test]
fn test_no_whitespace_needed_between_tokens() {
    assert_eq!(
        kinds_and_values("var y=1.5;"),
        vec![
            (TokenKind::Keyword, "var".into()),
            (TokenKind::Identifier, "y".into()),
            (TokenKind::Assignment, "=".into()),
            (TokenKind::Float, "1.5".into()),
            (TokenKind::Eol, ";".into()),
        ]
    );
}

#[test]
fn test_identifier_may_contain_digits() {
    assert_eq!(
        kinds_and_values("abc123"),
        vec![(TokenKind::Identifier, "abc123".into())]
    );
    // A leading digit starts a number instead.
    assert_eq!(
        kinds_and_values("1abc"),
        vec![
            (TokenKind::Integer, "1".into()),
            (TokenKind::Identifier, "abc".into()),
        ]
    );
}

#[test]
fn test_native_block_is_verbatim() {
    let tokens = kinds_and_values("`for (int i = 0; i < 3; i++) {\n  puts(\"hi\");\n}`");
    assert_eq!(
        tokens,
        vec![(
            TokenKind::Native,
            "for (int i = 0; i < 3; i++) {\n  puts(\"hi\");\n}".into()
        )]
    );
}

#[test]
fn test_string_keeps_inner_whitespace_and_backticks() {
    assert_eq!(
        kinds_and_values("\"  a `b`  \""),
        vec![(TokenKind::String, "  a `b`  ".into())]
    );
}

#[test]
fn test_empty_string_and_native() {
    assert_eq!(
        kinds_and_values("\"\" ``"),
        vec![
            (TokenKind::String, String::new()),
            (TokenKind::Native, String::new()),
        ]
    );
}

#[test]
fn test_spans_cover_delimiters() {
    let tokens: Vec<_> = Scanner::new("  x = \"ab\"").map(Result::unwrap).collect();
    assert_eq!(tokens[0].span, Span::new(2, 3));
    assert_eq!(tokens[1].span, Span::new(4, 5));
    assert_eq!(tokens[2].span, Span::new(6, 10));
}

#[test]
fn test_empty_and_blank_input() {
    assert!(kinds_and_values("").is_empty());
    assert!(kinds_and_values(" \n\t\r\n ").is_empty());
}

#[test]
fn test_unterminated_string() {
    let err = lex_err("var x = \"hello");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(8, 14));
    assert_eq!((err.line, err.column), (1, 9));
    assert_eq!(err.line_count, 1);
}

#[test]
fn test_unterminated_native() {
    let err = lex_err("var a = 1;\n`int b = 2;\n");
    assert_eq!(err.kind, LexErrorKind::UnterminatedNative);
    assert_eq!((err.line, err.column), (2, 1));
    assert_eq!(err.line_count, 2);
}

#[test]
fn test_invalid_float_points_at_second_dot() {
    let err = lex_err("var v = 1.2.3;");
    assert_eq!(err.kind, LexErrorKind::InvalidFloat);
    assert_eq!(err.span, Span::new(8, 12));
    assert_eq!((err.line, err.column), (1, 12));
}

#[test]
fn test_unexpected_character_is_an_error() {
    let err = lex_err("var x = 1 + 2;");
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: '+' });
    assert_eq!(err.span, Span::new(10, 11));
    assert_eq!((err.line, err.column), (1, 11));
}

#[test]
fn test_non_ascii_letter_is_unexpected() {
    let err = lex_err("é");
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { found: 'é' });
    assert_eq!(err.span, Span::new(0, 2));
}

#[test]
fn test_iteration_stops_after_error() {
    let mut scanner = Scanner::new("var @ x");
    assert!(scanner.next().unwrap().is_ok());
    assert!(scanner.next().unwrap().is_err());
    assert!(scanner.next().is_none());
}
