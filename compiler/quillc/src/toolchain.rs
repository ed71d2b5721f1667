//! C toolchain invocation.
//!
//! The generated C and the built-in support file are handed to an external C
//! compiler in one invocation that compiles and links:
//!
//! ```text
//! cc output.c entries.c -I <support dir> -o output
//! ```
//!
//! The [`Toolchain`] trait is the seam tests use to observe build requests
//! without a C compiler installed.

use std::ffi::OsString;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, instrument};

/// Environment variable naming the C compiler.
pub const CC_ENV: &str = "CC";

/// Compiler used when neither `--cc` nor `$CC` is set.
pub const DEFAULT_CC: &str = "cc";

/// Inputs and output of one toolchain run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// The generated C file.
    pub source: PathBuf,
    /// The built-in function support file.
    pub support: PathBuf,
    /// Where the executable goes.
    pub output: PathBuf,
}

impl BuildRequest {
    /// Directory searched for the support header.
    pub fn include_dir(&self) -> &Path {
        match self.support.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

/// Toolchain error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Compiler executable not found.
    #[error("C compiler '{program}' not found: {message}")]
    CompilerNotFound { program: String, message: String },
    /// Compiler ran and reported failure.
    #[error("{}", format_build_failed(.program, .exit_code, .stderr, .command))]
    BuildFailed {
        program: String,
        exit_code: Option<i32>,
        stderr: String,
        command: String,
    },
    /// I/O error while running the compiler.
    #[error("I/O error while building: {message}")]
    Io { message: String },
}

fn format_build_failed(
    program: &str,
    exit_code: &Option<i32>,
    stderr: &str,
    command: &str,
) -> String {
    let mut out = format!("building with '{program}' failed");
    if let Some(code) = exit_code {
        let _ = write!(out, " (exit code {code})");
    }
    if !stderr.is_empty() {
        let _ = write!(out, "\n\nCompiler stderr:\n{}", stderr.trim_end());
    }
    let _ = write!(out, "\n\nCommand: {command}");
    out
}

/// Something that turns a generated C file into an executable.
pub trait Toolchain {
    /// Build the executable, returning its path.
    fn build(&self, request: &BuildRequest) -> Result<PathBuf, BuildError>;
}

/// The system C compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CcToolchain {
    program: String,
}

impl CcToolchain {
    pub fn new(program: impl Into<String>) -> Self {
        CcToolchain {
            program: program.into(),
        }
    }

    /// Use `$CC`, falling back to `cc`.
    pub fn from_env() -> Self {
        match std::env::var(CC_ENV) {
            Ok(program) if !program.trim().is_empty() => Self::new(program.trim()),
            _ => Self::new(DEFAULT_CC),
        }
    }

    /// `--cc` if given, otherwise the environment.
    pub fn from_option(program: Option<&str>) -> Self {
        program.map_or_else(Self::from_env, Self::new)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// The full command line for a request.
    pub fn command(&self, request: &BuildRequest) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&request.source)
            .arg(&request.support)
            .arg("-I")
            .arg(request.include_dir())
            .arg("-o")
            .arg(&request.output);
        cmd
    }

    fn run(&self, cmd: &mut Command) -> Result<Output, BuildError> {
        cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BuildError::CompilerNotFound {
                    program: self.program.clone(),
                    message: e.to_string(),
                }
            } else {
                BuildError::Io {
                    message: e.to_string(),
                }
            }
        })
    }
}

impl Default for CcToolchain {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Toolchain for CcToolchain {
    #[instrument(level = "debug", skip_all, fields(cc = %self.program))]
    fn build(&self, request: &BuildRequest) -> Result<PathBuf, BuildError> {
        let mut cmd = self.command(request);
        let command_line = render_command(&cmd);
        debug!(command = %command_line, "invoking C compiler");

        let output = self.run(&mut cmd)?;
        if output.status.success() {
            debug!(output = %request.output.display(), "build succeeded");
            Ok(request.output.clone())
        } else {
            Err(BuildError::BuildFailed {
                program: self.program.clone(),
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                command: command_line,
            })
        }
    }
}

/// Render a command as a shell-like string for error messages.
fn render_command(cmd: &Command) -> String {
    let mut parts: Vec<OsString> = vec![cmd.get_program().to_owned()];
    parts.extend(cmd.get_args().map(ToOwned::to_owned));
    parts
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
