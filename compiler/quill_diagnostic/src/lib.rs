//! Diagnostic system for Quill error reporting.
//!
//! Every phase reports failures as a [`Diagnostic`]:
//! - Error codes for searchability (`quill explain E0001`)
//! - Clear messages (what went wrong)
//! - A source location (where it went wrong)
//! - Notes (extra context such as the input size)
//!
//! Errors are never recovered from. The driver renders the first one with
//! [`emitter::TerminalEmitter`] and exits.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
