//! Statement translation.

use quill_codegen::{call, declaration, render_value, CType, CodeEmitter, ENTRY_POINT};
use quill_ir::{Token, TokenKind};
use smallvec::SmallVec;
use tracing::debug;

use crate::{Cursor, ParseError, TranslateError};

/// Call arguments; built-in calls rarely take more than a handful.
type Args = SmallVec<[String; 4]>;

/// Single-pass translator from tokens to C statements.
pub struct Translator<'a> {
    cursor: Cursor<'a>,
    target: &'a str,
}

impl<'a> Translator<'a> {
    /// Translate into the program entry point.
    pub fn new(tokens: &'a [Token]) -> Self {
        Translator {
            cursor: Cursor::new(tokens),
            target: ENTRY_POINT,
        }
    }

    /// Emit statements into the function labeled `label` instead.
    #[must_use]
    pub fn with_target(mut self, label: &'a str) -> Self {
        self.target = label;
        self
    }

    /// Translate every statement, in order, until the tokens run out.
    pub fn run(mut self, emitter: &mut CodeEmitter) -> Result<(), TranslateError> {
        let mut count = 0usize;
        while let Some(token) = self.cursor.current() {
            let stmt = match token.kind {
                TokenKind::Keyword => self.declaration()?,
                TokenKind::Function => self.call()?,
                TokenKind::Native => self.native()?,
                _ => return Err(ParseError::unexpected_token("a statement", token).into()),
            };
            debug!(target_fn = self.target, %stmt, "translated statement");
            emitter.add_to_function(self.target, stmt)?;
            count += 1;
        }
        debug!(count, "translation complete");
        Ok(())
    }

    /// `var <name> = <value> [;]`, `const` alike.
    fn declaration(&mut self) -> Result<String, ParseError> {
        let keyword = self.cursor.expect(TokenKind::Keyword)?;
        if !matches!(keyword.value.as_str(), "var" | "const") {
            return Err(ParseError::unexpected_token("`var` or `const`", keyword));
        }
        let name = self.cursor.expect(TokenKind::Identifier)?;
        self.cursor.expect(TokenKind::Assignment)?;
        let value = self.cursor.expect_value()?;
        self.cursor.eat(TokenKind::Eol);

        Ok(declaration(
            CType::for_kind(value.kind),
            &name.value,
            &render_value(value.kind, &value.value),
        ))
    }

    /// `<builtin> <arg>* ;`
    fn call(&mut self) -> Result<String, ParseError> {
        let callee = self.cursor.expect(TokenKind::Function)?;
        let mut args = Args::new();
        loop {
            let Some(arg) = self.cursor.advance() else {
                return Err(ParseError::unexpected_eof(
                    "`;` after the call arguments",
                    self.cursor.end_span(),
                ));
            };
            if arg.kind == TokenKind::Eol {
                break;
            }
            args.push(render_value(arg.kind, &arg.value));
        }
        Ok(call(&callee.value, args.as_slice()))
    }

    /// Native block text, verbatim, with an optional `;` after it.
    fn native(&mut self) -> Result<String, ParseError> {
        let block = self.cursor.expect(TokenKind::Native)?;
        self.cursor.eat(TokenKind::Eol);
        Ok(block.value.clone())
    }
}
