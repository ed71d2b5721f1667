//! `quill build` and `quill emit`.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use crate::options::BuildOptions;
use crate::pipeline::{build_emitted, emit_source, read_source, transpile};
use crate::toolchain::{CcToolchain, Toolchain};
use crate::{BuildArtifact, CompileError};

use super::{report, SourceInfo};

/// Run the full pipeline for `source`, echoing the generated C to `out`
/// (unless quiet) before the toolchain runs, then the executable path.
pub fn build_with(
    source: &str,
    options: &BuildOptions,
    toolchain: &dyn Toolchain,
    out: &mut dyn Write,
) -> Result<BuildArtifact, CompileError> {
    let emitted = emit_source(source, options)?;
    if options.verbose {
        eprintln!("Wrote {}", emitted.path.display());
    }
    if !options.quiet {
        write!(out, "{}", emitted.c_source).map_err(|source| CompileError::Output { source })?;
    }
    let artifact = build_emitted(emitted, options, toolchain)?;
    writeln!(out, "Executable path {}", artifact.executable.display())
        .map_err(|source| CompileError::Output { source })?;
    Ok(artifact)
}

/// Compile a file to an executable with the system C compiler.
pub fn build_file(path: &str, options: &BuildOptions) -> ExitCode {
    let color = options.color_mode();
    let source = match read_source(Path::new(path)) {
        Ok(source) => source,
        Err(err) => return report(&err, None, color),
    };
    if options.verbose {
        eprintln!("Compiling {path}");
    }

    let toolchain = CcToolchain::from_option(options.cc.as_deref());
    let mut stdout = std::io::stdout().lock();
    match build_with(&source, options, &toolchain, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report(&err, Some(SourceInfo { path, text: &source }), color),
    }
}

/// Print the generated C without writing a file or building.
pub fn emit_c(path: &str, options: &BuildOptions) -> ExitCode {
    let color = options.color_mode();
    let source = match read_source(Path::new(path)) {
        Ok(source) => source,
        Err(err) => return report(&err, None, color),
    };
    match transpile(&source, &options.transpile_options()) {
        Ok(c_source) => {
            print!("{c_source}");
            ExitCode::SUCCESS
        }
        Err(err) => report(&err, Some(SourceInfo { path, text: &source }), color),
    }
}
