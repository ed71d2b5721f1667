//! Token scanner.
//!
//! [`Scanner::next_token`] is the stepping function: it skips whitespace,
//! classifies the current character, consumes one maximal run with the
//! matching production rule and returns the finished token.

use quill_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords::classify_word;
use crate::lex_error::LexError;

/// Stepping lexer state: a cursor plus the input size used in error reports.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    line_count: usize,
    /// Set after an error so iteration stops.
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `source`.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            line_count: source.trim().lines().count(),
            failed: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.cursor.eat_while(char::is_whitespace);

        let start = self.cursor;
        let Some(c) = start.current() else {
            return Ok(None);
        };

        let token = match c {
            '0'..='9' | '.' => self.number(start)?,
            '"' => self.delimited(start, '"', TokenKind::String)?,
            '`' => self.delimited(start, '`', TokenKind::Native)?,
            'a'..='z' | 'A'..='Z' => self.word(start),
            '=' => self.single(start, TokenKind::Assignment),
            ';' => self.single(start, TokenKind::Eol),
            found => {
                self.cursor.advance();
                return Err(LexError::unexpected_character(
                    found,
                    self.span_from(start),
                    start.line(),
                    start.column(),
                    self.line_count,
                ));
            }
        };

        trace!(?token, "token");
        Ok(Some(token))
    }

    /// Integer or float literal: a run of digits and at most one `.`.
    fn number(&mut self, start: Cursor<'a>) -> Result<Token, LexError> {
        let mut kind = TokenKind::Integer;
        while let Some(c) = self.cursor.current() {
            match c {
                '0'..='9' => {}
                '.' if kind == TokenKind::Float => {
                    let dot = self.cursor;
                    self.cursor.advance();
                    return Err(LexError::invalid_float(
                        self.span_from(start),
                        dot.line(),
                        dot.column(),
                        self.line_count,
                    ));
                }
                '.' => kind = TokenKind::Float,
                _ => break,
            }
            self.cursor.advance();
        }
        let value = self.cursor.slice_from(start.pos());
        Ok(Token::new(kind, value, self.span_from(start)))
    }

    /// String literal or native block: everything up to the closing
    /// delimiter, taken verbatim. The value excludes both delimiters.
    fn delimited(
        &mut self,
        start: Cursor<'a>,
        delimiter: char,
        kind: TokenKind,
    ) -> Result<Token, LexError> {
        self.cursor.advance();
        let content_start = self.cursor.pos();
        self.cursor.eat_while(|c| c != delimiter);

        if self.cursor.is_eof() {
            let span = self.span_from(start);
            let (line, column) = (start.line(), start.column());
            return Err(if kind == TokenKind::Native {
                LexError::unterminated_native(span, line, column, self.line_count)
            } else {
                LexError::unterminated_string(span, line, column, self.line_count)
            });
        }

        let value = self.cursor.slice_from(content_start);
        self.cursor.advance();
        Ok(Token::new(kind, value, self.span_from(start)))
    }

    /// Identifier, keyword, or built-in function name.
    fn word(&mut self, start: Cursor<'a>) -> Token {
        self.cursor.eat_while(|c| c.is_ascii_alphanumeric());
        let value = self.cursor.slice_from(start.pos());
        Token::new(classify_word(value), value, self.span_from(start))
    }

    /// One-character token.
    fn single(&mut self, start: Cursor<'a>, kind: TokenKind) -> Token {
        self.cursor.advance();
        Token::new(
            kind,
            self.cursor.slice_from(start.pos()),
            self.span_from(start),
        )
    }

    fn span_from(&self, start: Cursor<'a>) -> Span {
        Span::saturating_from_range(start.pos()..self.cursor.pos())
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests;
