//! Translation errors.

use std::fmt;

use quill_codegen::EmitError;
use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_ir::{Span, Token, TokenKind};

/// A token sequence that does not form a valid statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Literal value of the offending token, if there was one.
    pub token: Option<String>,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            token: None,
        }
    }

    /// Record the literal value of the offending token.
    #[must_use]
    pub fn with_token(mut self, value: impl Into<String>) -> Self {
        self.token = Some(value.into());
        self
    }

    /// `found` is not the token the statement needs next.
    #[cold]
    pub fn unexpected_token(expected: &str, found: &Token) -> Self {
        let found_text = match found.kind {
            TokenKind::Assignment | TokenKind::Eol => found.kind.display_name().to_string(),
            kind => format!("{} `{}`", kind.display_name(), found.value),
        };
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {found_text}"),
            found.span,
        )
        .with_token(found.value.clone())
    }

    /// The tokens ran out in the middle of a statement. `span` points just
    /// past the last token.
    #[cold]
    pub fn unexpected_eof(expected: &str, span: Span) -> Self {
        ParseError::new(
            ErrorCode::E1002,
            format!("unexpected end of input, expected {expected}"),
            span,
        )
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.token {
            Some(value) => format!("unexpected `{value}`"),
            None => "input ends here".to_string(),
        };
        let diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label);
        if self.code == ErrorCode::E1002 {
            diag.with_suggestion("statements that call a built-in function end with `;`")
        } else {
            diag
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}

/// Failure while translating tokens into the generated program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TranslateError {
    /// The tokens do not form a valid statement.
    Parse(ParseError),
    /// The emitter rejected a statement.
    Emit(EmitError),
}

impl TranslateError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TranslateError::Parse(err) => err.to_diagnostic(),
            TranslateError::Emit(err) => err.to_diagnostic(),
        }
    }
}

impl From<ParseError> for TranslateError {
    fn from(err: ParseError) -> Self {
        TranslateError::Parse(err)
    }
}

impl From<EmitError> for TranslateError {
    fn from(err: EmitError) -> Self {
        TranslateError::Emit(err)
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Parse(err) => err.fmt(f),
            TranslateError::Emit(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Parse(err) => Some(err),
            TranslateError::Emit(err) => Some(err),
        }
    }
}
