//! The Quill compiler driver.
//!
//! Wires the phase crates into one pipeline:
//!
//! ```text
//! .qs source ─▶ quill_lexer ─▶ quill_parse ─▶ quill_codegen ─▶ output.c ─▶ C toolchain ─▶ executable
//! ```
//!
//! Every failure is returned as a [`CompileError`]; only the `quill` binary
//! decides to print it and exit.

pub mod commands;
mod error;
pub mod options;
pub mod pipeline;
pub mod toolchain;
pub mod tracing_setup;

pub use error::CompileError;
pub use options::{parse_build_args, parse_build_options, BuildOptions, TranspileOptions};
pub use pipeline::{
    build_emitted, compile_file, emit_file, emit_source, read_source, transpile, BuildArtifact,
    EmittedSource,
};
pub use toolchain::{BuildError, BuildRequest, CcToolchain, Toolchain};
