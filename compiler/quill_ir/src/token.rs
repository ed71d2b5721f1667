//! Token types for the Quill lexer.

use std::fmt;

use super::Span;

/// Lexical class of a [`Token`].
///
/// A token is only ever committed with one of these kinds; characters the
/// lexer cannot classify are reported as lexical errors instead.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Digit run without a decimal point: `42`
    Integer,
    /// Digit run with exactly one decimal point: `3.14`, `.5`
    Float,
    /// Double-quoted literal; the value excludes the quotes.
    String,
    /// Backtick-delimited block passed through to the output verbatim.
    Native,
    /// Alphanumeric name that is neither a keyword nor a built-in.
    Identifier,
    /// Reserved word: `var`, `const`
    Keyword,
    /// Name from the built-in function registry: `printf`
    Function,
    /// `=`
    Assignment,
    /// `;`
    Eol,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Native => "native block",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Function => "built-in function",
            TokenKind::Assignment => "`=`",
            TokenKind::Eol => "`;`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexical unit with its span in the source.
///
/// `value` holds the token text with delimiters stripped: string and native
/// tokens carry their contents, every other kind carries its source text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            value: value.into(),
            kind,
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.value, self.span)
    }
}
