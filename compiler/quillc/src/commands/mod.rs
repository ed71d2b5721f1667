//! Command handlers for the `quill` CLI.
//!
//! Each handler prints its own output and diagnostics and returns the process
//! exit code; `main` only dispatches.

use std::io::IsTerminal;
use std::process::ExitCode;

use quill_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::CompileError;

mod build;
mod debug;
mod explain;

pub use build::{build_file, build_with, emit_c};
pub use debug::{format_tokens, lex_file};
pub use explain::{explain_error, lookup_docs, ExplainFailure};

/// Where a diagnostic came from, for `path:line:col` locations.
#[derive(Clone, Copy, Debug)]
pub struct SourceInfo<'a> {
    pub path: &'a str,
    pub text: &'a str,
}

/// Render an error the way the CLI prints it.
pub fn render_error(err: &CompileError, source: Option<SourceInfo<'_>>, color: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), color, false);
    if let Some(info) = source.filter(|_| err.has_source_location()) {
        emitter = emitter.with_file_path(info.path).with_source(info.text);
    }
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

/// Print an error to stderr and return the failure exit code.
pub(crate) fn report(err: &CompileError, source: Option<SourceInfo<'_>>, color: ColorMode) -> ExitCode {
    tracing::debug!(error = %err, "reporting failure");
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(color, is_tty);
    if let Some(info) = source.filter(|_| err.has_source_location()) {
        emitter = emitter.with_file_path(info.path).with_source(info.text);
    }
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
    ExitCode::FAILURE
}
