//! Quill C code generation.
//!
//! # Modules
//!
//! - [`emitter`]: the generated program as ordered, labeled statement lists
//! - [`c_type`]: primitive C type chosen for each literal kind
//! - [`stmt`]: C statement text for declarations and calls
//! - [`indent`]: brace-depth indentation pass run once at finalization
//!
//! The generated program is a directive block followed by function blocks.
//! Statements are appended per function label and rendered in insertion
//! order, immediately before the function's epilogue.

pub mod c_type;
pub mod emitter;
pub mod indent;
pub mod stmt;

pub use c_type::CType;
pub use emitter::{CodeEmitter, EmitError, FunctionBlock, DEFAULT_HEADER, ENTRY_POINT};
pub use indent::{indent, INDENT_CHAR};
pub use stmt::{call, declaration, render_value};
