//! Quill Compiler CLI

use std::process::ExitCode;

use quillc::commands::{build_file, emit_c, explain_error, lex_file};
use quillc::options::parse_build_args;
use quillc::tracing_setup::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let command = &args[1];

    match command.as_str() {
        "build" => {
            if args.len() < 3 {
                eprintln!("Usage: quill build <file.qs> [options]");
                eprintln!();
                print_build_options();
                return ExitCode::FAILURE;
            }
            build_file(&args[2], &parse_build_args(&args[3..]))
        }
        "emit" => {
            if args.len() < 3 {
                eprintln!("Usage: quill emit <file.qs> [--header=<name>]");
                return ExitCode::FAILURE;
            }
            emit_c(&args[2], &parse_build_args(&args[3..]))
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: quill lex <file.qs>");
                return ExitCode::FAILURE;
            }
            lex_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("Quill Compiler {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: quill explain <ERROR_CODE>");
                eprintln!("Example: quill explain E0001");
                return ExitCode::FAILURE;
            }
            explain_error(&args[2])
        }
        _ => {
            // A bare source file builds it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("qs"))
            {
                build_file(command, &parse_build_args(&args[2..]))
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn print_build_options() {
    eprintln!("Options:");
    eprintln!("  -o <path>           Executable path (default: ./output)");
    eprintln!("  --emit-to=<path>    Generated C file (default: output.c)");
    eprintln!("  --support=<path>    Built-in function support file (default: entries.c)");
    eprintln!("  --header=<name>     Header included by the generated C (default: entries.h)");
    eprintln!("  --cc=<program>      C compiler (default: $CC, then cc)");
    eprintln!("  --color=<mode>      Diagnostic colors: auto, always, never");
    eprintln!("  --quiet             Don't print the generated C");
    eprintln!("  -v, --verbose       Verbose output");
}

fn print_usage() {
    println!("Quill Compiler");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  <file.qs>            Same as `build <file.qs>`");
    println!("  build <file.qs>      Transpile to C and build an executable");
    println!("  emit <file.qs>       Print the generated C without building");
    println!("  lex <file.qs>        Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E0001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Build options:");
    println!("  -o <path>           Executable path (default: ./output)");
    println!("  --emit-to=<path>    Generated C file (default: output.c)");
    println!("  --support=<path>    Built-in function support file (default: entries.c)");
    println!("  --header=<name>     Header included by the generated C (default: entries.h)");
    println!("  --cc=<program>      C compiler (default: $CC, then cc)");
    println!("  --color=<mode>      Diagnostic colors: auto, always, never");
    println!("  --quiet             Don't print the generated C");
    println!("  -v, --verbose       Verbose output");
    println!();
    println!("Environment:");
    println!("  CC                  C compiler used when --cc is not given");
    println!("  RUST_LOG            Log filter, e.g. RUST_LOG=quill_lexer=trace");
    println!("  QUILL_LOG_TREE=1    Hierarchical log output");
    println!();
    println!("Examples:");
    println!("  quill hello.qs");
    println!("  quill build hello.qs -o hello --support=runtime/entries.c");
    println!("  quill emit hello.qs");
    println!("  quill explain E0003");
}
