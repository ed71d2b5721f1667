//! Reserved words and the built-in function registry.

use quill_ir::TokenKind;

/// Words lexed as [`TokenKind::Keyword`].
pub const RESERVED_WORDS: &[&str] = &["var", "const"];

/// Names of native functions provided by the runtime support file.
///
/// Calls to these are the only function calls the language has.
pub const BUILTIN_FUNCTIONS: &[&str] = &["printf"];

/// Classify an identifier-shaped word.
///
/// The built-in registry wins over reserved words, so a name present in
/// both lexes as [`TokenKind::Function`].
pub fn classify_word(word: &str) -> TokenKind {
    if BUILTIN_FUNCTIONS.contains(&word) {
        TokenKind::Function
    } else if RESERVED_WORDS.contains(&word) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}
