//! Code Emitter
//!
//! Owns the generated program. Instead of splicing text at marker comments,
//! the program is kept as a list of directive lines and a list of function
//! blocks, each with its own ordered statement list. Rendering happens once.

use quill_diagnostic::{Diagnostic, ErrorCode};
use rustc_hash::FxHashMap;
use tracing::trace;

/// Label of the program entry point.
pub const ENTRY_POINT: &str = "main";

/// Header declaring the built-in functions, included unconditionally.
pub const DEFAULT_HEADER: &str = "entries.h";

const ENTRY_SIGNATURE: &str = "int main(int argc, char** argv)";
const ENTRY_EPILOGUE: &str = "return 0;";

/// Error raised when the emitter is asked to do something it cannot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// `add_to_function` named a function the program does not contain.
    #[error("no function labeled `{label}` in the generated program")]
    UnknownFunction { label: String },
}

impl EmitError {
    /// Convert to a [`Diagnostic`]. Emit errors are compiler bugs, not user
    /// mistakes, so they carry the internal error code.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E9001)
            .with_message(self.to_string())
            .with_note("this is a bug in the Quill compiler")
    }
}

/// One function of the generated program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionBlock {
    /// Name used by `add_to_function` to target this block.
    pub label: String,
    /// Everything before the opening brace, e.g. `int main(void)`.
    pub signature: String,
    /// Statements in insertion order.
    pub body: Vec<String>,
    /// Lines that always close the body, after every inserted statement.
    pub epilogue: Vec<String>,
}

/// The generated C program under construction.
#[derive(Clone, Debug)]
pub struct CodeEmitter {
    /// Directive lines, first line first.
    directives: Vec<String>,
    functions: Vec<FunctionBlock>,
    by_label: FxHashMap<String, usize>,
}

impl CodeEmitter {
    /// Create the program skeleton: the entry point with its `return 0;`
    /// epilogue and an `#include` of `header`.
    pub fn new(header: &str) -> Self {
        let mut emitter = Self::empty();
        emitter.add_function(ENTRY_POINT, ENTRY_SIGNATURE, [ENTRY_EPILOGUE]);
        emitter.add_top_level("include", &format!("\"{header}\""));
        emitter
    }

    /// Create a program with no directives and no functions.
    pub fn empty() -> Self {
        CodeEmitter {
            directives: Vec::new(),
            functions: Vec::new(),
            by_label: FxHashMap::default(),
        }
    }

    /// Register a function block. A label that already exists is replaced.
    pub fn add_function<I, S>(&mut self, label: &str, signature: &str, epilogue: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let block = FunctionBlock {
            label: label.to_string(),
            signature: signature.to_string(),
            body: Vec::new(),
            epilogue: epilogue.into_iter().map(Into::into).collect(),
        };
        if let Some(&idx) = self.by_label.get(label) {
            self.functions[idx] = block;
        } else {
            self.by_label.insert(label.to_string(), self.functions.len());
            self.functions.push(block);
        }
    }

    /// Prepend `#<directive> <content>` above every existing directive line.
    pub fn add_top_level(&mut self, directive: &str, content: &str) {
        self.directives.insert(0, format!("#{directive} {content}"));
    }

    /// Append a statement to the named function, after all earlier
    /// insertions and before the epilogue. The line is not validated.
    pub fn add_to_function(
        &mut self,
        label: &str,
        code_line: impl Into<String>,
    ) -> Result<(), EmitError> {
        let Some(&idx) = self.by_label.get(label) else {
            return Err(EmitError::UnknownFunction {
                label: label.to_string(),
            });
        };
        let code_line = code_line.into();
        trace!(label, %code_line, "emit");
        self.functions[idx].body.push(code_line);
        Ok(())
    }

    /// Render the program as unindented text with a trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for directive in &self.directives {
            out.push_str(directive);
            out.push('\n');
        }
        for function in &self.functions {
            out.push_str(&function.signature);
            out.push_str(" {\n");
            for line in function.body.iter().chain(&function.epilogue) {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str("}\n");
        }
        out
    }
}

impl Default for CodeEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER)
    }
}
