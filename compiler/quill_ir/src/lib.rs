//! Quill IR - shared data types for the Quill compiler.
//!
//! This crate holds the values passed between phases:
//! - [`Span`] for source locations
//! - [`Token`] and [`TokenKind`] for lexer output
//!
//! There is no syntax tree. The translator consumes tokens directly and
//! drives the code emitter as it goes.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind};
