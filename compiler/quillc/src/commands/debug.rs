//! `quill lex`: print the token stream.

use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

use quill_diagnostic::emitter::ColorMode;
use quill_ir::Token;

use crate::pipeline::read_source;
use crate::CompileError;

use super::{report, SourceInfo};

/// Format a token listing the way `quill lex` prints it.
pub fn format_tokens(path: &str, tokens: &[Token]) -> String {
    let mut out = format!("Tokens for '{path}' ({} tokens):\n", tokens.len());
    for token in tokens {
        let _ = writeln!(out, "  {token:?}");
    }
    out
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> ExitCode {
    let source = match read_source(Path::new(path)) {
        Ok(source) => source,
        Err(err) => return report(&err, None, ColorMode::Auto),
    };
    match quill_lexer::lex(&source) {
        Ok(tokens) => {
            print!("{}", format_tokens(path, &tokens));
            ExitCode::SUCCESS
        }
        Err(err) => report(
            &CompileError::from(err),
            Some(SourceInfo { path, text: &source }),
            ColorMode::Auto,
        ),
    }
}
