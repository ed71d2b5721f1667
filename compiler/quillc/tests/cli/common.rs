//! Shared test utilities for driver tests.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use quillc::{BuildError, BuildOptions, BuildRequest, Toolchain};
use tempfile::TempDir;

/// A scratch directory holding one source file and the build outputs.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl Workspace {
    pub fn new(source: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.qs");
        fs::write(&input, source).unwrap();
        Workspace { dir, input }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Options that keep every output inside the workspace.
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            output: Some(self.path("prog")),
            emit_to: Some(self.path("output.c")),
            support: Some(self.path("entries.c")),
            quiet: true,
            ..BuildOptions::default()
        }
    }
}

/// What the toolchain saw: the request and the C file contents at that time.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub request: BuildRequest,
    pub c_source: String,
}

/// Toolchain that records requests instead of compiling.
#[derive(Default)]
pub struct RecordingToolchain {
    pub calls: RefCell<Vec<Recorded>>,
    pub fail_with: Option<BuildError>,
}

impl RecordingToolchain {
    pub fn failing(err: BuildError) -> Self {
        RecordingToolchain {
            calls: RefCell::default(),
            fail_with: Some(err),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Toolchain for RecordingToolchain {
    fn build(&self, request: &BuildRequest) -> Result<PathBuf, BuildError> {
        let c_source = fs::read_to_string(&request.source).unwrap();
        self.calls.borrow_mut().push(Recorded {
            request: request.clone(),
            c_source,
        });
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(request.output.clone()),
        }
    }
}

/// Standard output whose reader has gone away.
pub struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Path to the repository's runtime support files.
pub fn runtime_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../runtime")
        .canonicalize()
        .unwrap()
}
