//! Lexer error types.
//!
//! Every lexical error is fatal. A [`LexError`] records WHAT went wrong
//! (`kind`), WHERE (`span`, plus the line and column the cursor was at) and
//! the size of the input being lexed, so the report can be understood
//! without the source file open.

use std::fmt;

use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::Span;

/// A fatal lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// The offending construct. Unterminated literals span from the opening
    /// delimiter to the end of input.
    pub span: Span,
    /// 1-based line of the error location.
    pub line: u32,
    /// 1-based column of the error location.
    pub column: u32,
    /// Number of lines in the input (after trimming).
    pub line_count: usize,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"` for a string literal.
    UnterminatedString,
    /// Missing closing `` ` `` for a native block.
    UnterminatedNative,
    /// A second `.` inside one number literal.
    InvalidFloat,
    /// A character that starts no token.
    UnexpectedCharacter { found: char },
}

impl LexError {
    fn new(kind: LexErrorKind, span: Span, line: u32, column: u32, line_count: usize) -> Self {
        LexError {
            kind,
            span,
            line,
            column,
            line_count,
        }
    }

    /// Missing closing `"`.
    #[cold]
    pub fn unterminated_string(span: Span, line: u32, column: u32, line_count: usize) -> Self {
        Self::new(
            LexErrorKind::UnterminatedString,
            span,
            line,
            column,
            line_count,
        )
    }

    /// Missing closing backtick.
    #[cold]
    pub fn unterminated_native(span: Span, line: u32, column: u32, line_count: usize) -> Self {
        Self::new(
            LexErrorKind::UnterminatedNative,
            span,
            line,
            column,
            line_count,
        )
    }

    /// Second decimal point in a number literal.
    #[cold]
    pub fn invalid_float(span: Span, line: u32, column: u32, line_count: usize) -> Self {
        Self::new(LexErrorKind::InvalidFloat, span, line, column, line_count)
    }

    /// Character that cannot start a token.
    #[cold]
    pub fn unexpected_character(
        found: char,
        span: Span,
        line: u32,
        column: u32,
        line_count: usize,
    ) -> Self {
        Self::new(
            LexErrorKind::UnexpectedCharacter { found },
            span,
            line,
            column,
            line_count,
        )
    }

    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnexpectedCharacter { .. } => ErrorCode::E0002,
            LexErrorKind::InvalidFloat => ErrorCode::E0003,
            LexErrorKind::UnterminatedNative => ErrorCode::E0004,
        }
    }

    /// Primary error message.
    pub fn message(&self) -> String {
        match self.kind {
            LexErrorKind::UnterminatedString => {
                "'\"' expected at the end of the string".to_string()
            }
            LexErrorKind::UnterminatedNative => {
                "'`' expected at the end of the native code".to_string()
            }
            LexErrorKind::InvalidFloat => "invalid float".to_string(),
            LexErrorKind::UnexpectedCharacter { found } => {
                format!("unexpected character {found:?}")
            }
        }
    }

    fn label(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::UnterminatedNative => "native block starts here",
            LexErrorKind::InvalidFloat => "second decimal point",
            LexErrorKind::UnexpectedCharacter { .. } => "not part of any token",
        }
    }

    /// Convert to a full [`Diagnostic`] for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.message())
            .with_label(self.span, self.label())
            .with_note(format!(
                "at line {}, column {} of {} line{}",
                self.line,
                self.column,
                self.line_count,
                if self.line_count == 1 { "" } else { "s" }
            ));
        match self.kind {
            LexErrorKind::InvalidFloat => {
                diag = diag.with_suggestion("a number literal may contain at most one `.`");
            }
            LexErrorKind::UnexpectedCharacter { .. } => {
                diag = diag.with_suggestion(
                    "operators are not part of the language; use a native block (`...`) for raw C",
                );
            }
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedNative => {}
        }
        diag
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (line {}, column {} of {}-line input)",
            self.message(),
            self.line,
            self.column,
            self.line_count
        )
    }
}

impl std::error::Error for LexError {}
