//! Builds with the real C compiler, when one is installed.

use std::process::Command;

use quillc::{compile_file, BuildOptions, CcToolchain};

use crate::common::{runtime_dir, Workspace};

fn have_cc(cc: &CcToolchain) -> bool {
    Command::new(cc.program())
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success())
}

#[test]
fn hello_world_runs() {
    let cc = CcToolchain::from_env();
    if !have_cc(&cc) {
        eprintln!("skipping: no C compiler '{}'", cc.program());
        return;
    }

    let ws = Workspace::new(
        "var greeting = \"hello\";\nvar n = 3;\n`for (int i = 0; i < n; i++) {\n  printf(\"%s %d\\n\", greeting, i);\n}`\n",
    );
    let options = BuildOptions {
        support: Some(runtime_dir().join("entries.c")),
        ..ws.options()
    };

    let artifact = compile_file(&ws.input, &options, &cc).unwrap();
    let run = Command::new(&artifact.executable).output().unwrap();

    assert!(run.status.success());
    assert_eq!(
        String::from_utf8_lossy(&run.stdout),
        "hello 0\nhello 1\nhello 2\n"
    );
}
