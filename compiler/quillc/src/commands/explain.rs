//! The `explain` command: display documentation for compiler error codes.

use std::process::ExitCode;

use quill_diagnostic::{ErrorCode, ErrorDocs};

/// Why a code could not be explained.
#[derive(Debug, PartialEq, Eq)]
pub enum ExplainFailure {
    /// Not an error code at all.
    UnknownCode,
    /// A real code without a long-form description.
    Undocumented(ErrorCode),
}

/// Look up the long-form description of an error code string.
pub fn lookup_docs(code_str: &str) -> Result<&'static str, ExplainFailure> {
    let code = code_str
        .parse::<ErrorCode>()
        .map_err(|()| ExplainFailure::UnknownCode)?;
    ErrorDocs::get(code).ok_or(ExplainFailure::Undocumented(code))
}

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str) -> ExitCode {
    match lookup_docs(code_str) {
        Ok(doc) => {
            println!("{doc}");
            ExitCode::SUCCESS
        }
        Err(ExplainFailure::UnknownCode) => {
            eprintln!("Unknown error code: {code_str}");
            eprintln!();
            eprintln!("Codes have the format EXXXX where X is a digit.");
            eprintln!("Examples: E0001, E1001, E5001");
            ExitCode::FAILURE
        }
        Err(ExplainFailure::Undocumented(code)) => {
            eprintln!("No documentation available for {code}");
            eprintln!();
            eprintln!("{code}: {}", code.summary());
            ExitCode::FAILURE
        }
    }
}
