//! Lexer for Quill.
//!
//! Converts source text into an ordered sequence of [`Token`]s.
//!
//! # Architecture
//!
//! ```text
//! source text
//!     │
//!     ▼
//! Cursor   ── position, line/column, previous/current/next character
//!     │
//!     ▼
//! Scanner  ── next_token(): one production rule per call
//!     │
//!     ▼
//! Vec<Token>
//! ```
//!
//! The scanner holds no partially built token between calls. Each production
//! rule reads from a cursor snapshot and returns a finished [`Token`] value.
//! The first malformed construct stops lexing with a [`LexError`].

mod cursor;
mod keywords;
mod lex_error;
mod scanner;

pub use cursor::Cursor;
pub use keywords::{classify_word, BUILTIN_FUNCTIONS, RESERVED_WORDS};
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use quill_ir::Token;

/// Lex source code into a token sequence.
///
/// Stops at the first lexical error; no partial token list is returned.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Scanner::new(source).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tokens.len(), "lexing complete");
    Ok(tokens)
}
