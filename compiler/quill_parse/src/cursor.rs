//! Token cursor for navigating the token stream.

use quill_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::ParseError;

/// Forward-only cursor over a token slice.
///
/// Unlike a lexer-produced stream with an EOF sentinel, the slice simply
/// ends; every accessor returns `None` past the last token.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Check if the current token has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|tok| tok.kind == kind)
    }

    /// Consume the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(pos = self.pos, ?token, "advance");
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::unexpected_token(kind.display_name(), token)),
            None => Err(ParseError::unexpected_eof(
                kind.display_name(),
                self.end_span(),
            )),
        }
    }

    /// Consume any token except a statement terminator.
    pub fn expect_value(&mut self) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.kind != TokenKind::Eol => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(ParseError::unexpected_token("a value", token)),
            None => Err(ParseError::unexpected_eof("a value", self.end_span())),
        }
    }

    /// Empty span just past the last token.
    pub fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map_or(Span::DUMMY, |tok| Span::point(tok.span.end))
    }
}
