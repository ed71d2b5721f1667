//! The compile pipeline.
//!
//! `transpile` is the pure part (text in, C text out). `emit_file` adds the
//! file system, `build_emitted` adds the toolchain, and `compile_file` runs
//! all of it. Nothing is written unless lexing and translation succeed.

use std::fs;
use std::path::{Path, PathBuf};

use quill_codegen::{indent, CodeEmitter};
use tracing::{debug, info, instrument};

use crate::options::{BuildOptions, TranspileOptions};
use crate::toolchain::{BuildRequest, Toolchain};
use crate::CompileError;

/// Generated C that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedSource {
    /// The formatted C program.
    pub c_source: String,
    /// Where it was written.
    pub path: PathBuf,
}

/// Result of a full build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    pub emitted: EmittedSource,
    /// Path of the built executable, as reported by the toolchain.
    pub executable: PathBuf,
}

/// Lex, translate, render and indent. No I/O.
#[instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn transpile(source: &str, options: &TranspileOptions) -> Result<String, CompileError> {
    let tokens = quill_lexer::lex(source)?;
    let mut emitter = CodeEmitter::new(&options.header);
    quill_parse::translate(&tokens, &mut emitter)?;
    let c_source = indent(&emitter.render());
    debug!(bytes = c_source.len(), "transpiled");
    Ok(c_source)
}

/// Read a source file.
pub fn read_source(path: &Path) -> Result<String, CompileError> {
    fs::read_to_string(path).map_err(|source| CompileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Transpile `source` and write the result to the configured output file.
pub fn emit_source(source: &str, options: &BuildOptions) -> Result<EmittedSource, CompileError> {
    let c_source = transpile(source, &options.transpile_options())?;
    let path = options.emit_path();
    fs::write(&path, &c_source).map_err(|source| CompileError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "wrote generated C");
    Ok(EmittedSource { c_source, path })
}

/// Read `path`, transpile it and write the generated C.
pub fn emit_file(path: &Path, options: &BuildOptions) -> Result<EmittedSource, CompileError> {
    let source = read_source(path)?;
    emit_source(&source, options)
}

/// Hand written C to the toolchain.
pub fn build_emitted(
    emitted: EmittedSource,
    options: &BuildOptions,
    toolchain: &dyn Toolchain,
) -> Result<BuildArtifact, CompileError> {
    let request = BuildRequest {
        source: emitted.path.clone(),
        support: options.support_path(),
        output: options.executable_path(),
    };
    let executable = toolchain.build(&request)?;
    info!(executable = %executable.display(), "build complete");
    Ok(BuildArtifact {
        emitted,
        executable,
    })
}

/// The whole pipeline: read, transpile, write, build.
#[instrument(level = "debug", skip(options, toolchain), fields(path = %path.display()))]
pub fn compile_file(
    path: &Path,
    options: &BuildOptions,
    toolchain: &dyn Toolchain,
) -> Result<BuildArtifact, CompileError> {
    let emitted = emit_file(path, options)?;
    build_emitted(emitted, options, toolchain)
}

#[cfg(test)]
mod tests;
