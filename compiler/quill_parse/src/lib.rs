//! Translator for Quill.
//!
//! Walks the token sequence once, left to right, and emits one C statement
//! per Quill statement into a [`CodeEmitter`]. There is no syntax tree: each
//! statement is recognized by its first token and translated on the spot.
//!
//! | First token | Statement | Emitted C |
//! |---|---|---|
//! | `var` / `const` | `var x = 5;` | `int x = 5;` |
//! | built-in function | `printf "hi" x;` | `printf("hi", x);` |
//! | native block | `` `x++;` `` | `x++;` |
//!
//! The first malformed statement stops translation with a [`TranslateError`].

mod cursor;
mod error;
mod translator;

pub use cursor::Cursor;
pub use error::{ParseError, TranslateError};
pub use translator::Translator;

use quill_codegen::CodeEmitter;
use quill_ir::Token;

/// Translate a token sequence into statements of `emitter`'s entry point.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn translate(tokens: &[Token], emitter: &mut CodeEmitter) -> Result<(), TranslateError> {
    Translator::new(tokens).run(emitter)
}
