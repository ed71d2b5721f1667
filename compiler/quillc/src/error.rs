//! Driver errors.

use std::io;
use std::path::PathBuf;

use quill_codegen::EmitError;
use quill_diagnostic::{Diagnostic, ErrorCode};
use quill_lexer::LexError;
use quill_parse::{ParseError, TranslateError};

use crate::toolchain::BuildError;

/// Any failure between reading the source and producing the executable.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write to standard output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Build(#[from] BuildError),
}

impl From<TranslateError> for CompileError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::Parse(err) => CompileError::Parse(err),
            TranslateError::Emit(err) => CompileError::Emit(err),
        }
    }
}

impl CompileError {
    /// Whether the error has a location in the source file.
    pub fn has_source_location(&self) -> bool {
        matches!(self, CompileError::Lex(_) | CompileError::Parse(_))
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CompileError::Read { path, source } => Diagnostic::error(ErrorCode::E5003)
                .with_message(read_failure_message(path, source)),
            CompileError::Lex(err) => err.to_diagnostic(),
            CompileError::Parse(err) => err.to_diagnostic(),
            CompileError::Emit(err) => err.to_diagnostic(),
            CompileError::Write { path, source } => Diagnostic::error(ErrorCode::E5002)
                .with_message(format!("cannot write '{}'", path.display()))
                .with_note(source.to_string()),
            CompileError::Output { source } => Diagnostic::error(ErrorCode::E5002)
                .with_message("cannot write to standard output")
                .with_note(source.to_string()),
            CompileError::Build(err) => build_diagnostic(err),
        }
    }
}

fn read_failure_message(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}

fn build_diagnostic(err: &BuildError) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E5001);
    match err {
        BuildError::CompilerNotFound { program, message } => diag
            .with_message(format!("C compiler '{program}' not found"))
            .with_note(message.clone())
            .with_suggestion("install a C compiler, or point `--cc` or `CC` at one"),
        BuildError::BuildFailed {
            program,
            exit_code,
            stderr,
            command,
        } => {
            let message = match exit_code {
                Some(code) => format!("building with '{program}' failed (exit code {code})"),
                None => format!("building with '{program}' failed"),
            };
            let diag = diag.with_message(message);
            let diag = if stderr.trim().is_empty() {
                diag
            } else {
                diag.with_note(format!("compiler output:\n{}", stderr.trim_end()))
            };
            diag.with_note(format!("command: {command}"))
        }
        BuildError::Io { message } => diag.with_message(format!("I/O error while building: {message}")),
    }
}
