//! Build configuration.
//!
//! Every field of [`BuildOptions`] is optional so that flag sets can be merged
//! over each other; the accessors resolve the defaults.

use std::path::PathBuf;

use quill_codegen::DEFAULT_HEADER;
use quill_diagnostic::emitter::ColorMode;

/// Generated C file written next to the invocation.
pub const DEFAULT_EMIT_PATH: &str = "output.c";

/// Support file compiled alongside the generated C.
pub const DEFAULT_SUPPORT_PATH: &str = "entries.c";

/// Executable name before the platform suffix is added.
pub const DEFAULT_EXECUTABLE_STEM: &str = "output";

/// Options for the pure source-to-source step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Header included at the top of the generated program.
    pub header: String,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        TranspileOptions {
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

/// Options for `quill build` and `quill emit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Executable path (-o)
    pub output: Option<PathBuf>,
    /// Generated C path (--emit-to=<path>)
    pub emit_to: Option<PathBuf>,
    /// Built-in function support file (--support=<path>)
    pub support: Option<PathBuf>,
    /// Header name included by the generated C (--header=<name>)
    pub header: Option<String>,
    /// C compiler program (--cc=<program>)
    pub cc: Option<String>,
    /// Diagnostic colors (--color=<mode>)
    pub color: Option<ColorMode>,
    /// Don't echo the generated C (--quiet)
    pub quiet: bool,
    /// Verbose output (-v, --verbose)
    pub verbose: bool,
}

impl BuildOptions {
    /// Merge another set of options into this one.
    ///
    /// Options set in `other` win; boolean flags are OR'd.
    pub fn merge(&mut self, other: &Self) {
        if other.output.is_some() {
            self.output.clone_from(&other.output);
        }
        if other.emit_to.is_some() {
            self.emit_to.clone_from(&other.emit_to);
        }
        if other.support.is_some() {
            self.support.clone_from(&other.support);
        }
        if other.header.is_some() {
            self.header.clone_from(&other.header);
        }
        if other.cc.is_some() {
            self.cc.clone_from(&other.cc);
        }
        if other.color.is_some() {
            self.color = other.color;
        }

        self.quiet |= other.quiet;
        self.verbose |= other.verbose;
    }

    /// Executable path, resolved against the working directory so the
    /// reported path can be run from anywhere.
    pub fn executable_path(&self) -> PathBuf {
        let path = self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "{DEFAULT_EXECUTABLE_STEM}{}",
                std::env::consts::EXE_SUFFIX
            ))
        });
        if path.is_absolute() {
            return path;
        }
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path,
        }
    }

    pub fn emit_path(&self) -> PathBuf {
        self.emit_to
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EMIT_PATH))
    }

    pub fn support_path(&self) -> PathBuf {
        self.support
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SUPPORT_PATH))
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }

    /// Options for the transpile step of this build.
    pub fn transpile_options(&self) -> TranspileOptions {
        match &self.header {
            Some(header) => TranspileOptions {
                header: header.clone(),
            },
            None => TranspileOptions::default(),
        }
    }
}

/// Parse build flags. `-o` takes the next argument, so callers handle it
/// before handing single flags here; `-o=<path>` is accepted too.
///
/// Unknown flags are reported as warnings and otherwise ignored.
pub fn parse_build_options(args: &[String]) -> BuildOptions {
    let mut options = BuildOptions::default();

    for arg in args {
        if let Some(output) = arg.strip_prefix("-o=") {
            options.output = Some(PathBuf::from(output));
        } else if let Some(output) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(output));
        } else if let Some(path) = arg.strip_prefix("--emit-to=") {
            options.emit_to = Some(PathBuf::from(path));
        } else if let Some(path) = arg.strip_prefix("--support=") {
            options.support = Some(PathBuf::from(path));
        } else if let Some(name) = arg.strip_prefix("--header=") {
            options.header = Some(name.to_string());
        } else if let Some(program) = arg.strip_prefix("--cc=") {
            options.cc = Some(program.to_string());
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            if let Some(mode) = ColorMode::parse(mode) {
                options.color = Some(mode);
            } else {
                eprintln!("warning: unknown color mode '{mode}', options: auto, always, never");
            }
        } else if arg == "--quiet" || arg == "-q" {
            options.quiet = true;
        } else if arg == "--verbose" || arg == "-v" {
            options.verbose = true;
        } else {
            eprintln!("warning: unknown option '{arg}'");
        }
    }

    options
}

/// Parse everything after `<file>` on a build-style command line.
pub fn parse_build_args(args: &[String]) -> BuildOptions {
    let mut options = BuildOptions::default();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "-o" && i + 1 < args.len() {
            options.output = Some(PathBuf::from(&args[i + 1]));
            i += 2;
        } else {
            let parsed = parse_build_options(&args[i..=i]);
            options.merge(&parsed);
            i += 1;
        }
    }
    options
}
