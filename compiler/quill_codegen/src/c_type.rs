//! Primitive C types for literal values.
//!
//! Quill has no type annotations. The C type of a declaration is picked from
//! the lexical class of its initializer.

use std::fmt;

use quill_ir::TokenKind;

/// A primitive C type used in generated declarations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CType {
    /// `char*`
    CharPtr,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `void*`, the fallback for any non-literal initializer.
    VoidPtr,
}

impl CType {
    /// Pick the C type for an initializer of the given kind.
    pub fn for_kind(kind: TokenKind) -> Self {
        match kind {
            TokenKind::String => CType::CharPtr,
            TokenKind::Integer => CType::Int,
            TokenKind::Float => CType::Float,
            _ => CType::VoidPtr,
        }
    }

    /// The type as written in C source.
    pub fn as_str(self) -> &'static str {
        match self {
            CType::CharPtr => "char*",
            CType::Int => "int",
            CType::Float => "float",
            CType::VoidPtr => "void*",
        }
    }
}

impl fmt::Display for CType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
