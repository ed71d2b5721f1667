//! Indentation Pass
//!
//! Re-indents generated C by brace depth. Runs once, after rendering, over
//! the whole program text. Native blocks pass through here too, so their
//! own indentation is replaced.

/// One level of indentation.
pub const INDENT_CHAR: char = '\t';

/// Line-oriented output buffer.
struct LineWriter {
    buffer: String,
}

impl LineWriter {
    fn with_capacity(capacity: usize) -> Self {
        LineWriter {
            buffer: String::with_capacity(capacity),
        }
    }

    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, depth: usize) {
        self.buffer.extend(std::iter::repeat(INDENT_CHAR).take(depth));
    }

    fn finish(self) -> String {
        self.buffer
    }
}

/// Trim every line and indent it with one [`INDENT_CHAR`] per open brace.
///
/// A line starting with `}` is dedented before it is written (never below
/// zero); a line ending with `{` opens a level for the lines after it. Blank
/// lines stay empty. The number of lines is unchanged, so a trailing newline
/// survives. Applying the pass twice gives the same text as applying it once.
pub fn indent(source: &str) -> String {
    let mut out = LineWriter::with_capacity(source.len() + source.len() / 4);
    let mut depth = 0usize;

    for (i, raw) in source.split('\n').enumerate() {
        if i > 0 {
            out.emit_newline();
        }
        let line = raw.trim();
        if line.starts_with('}') {
            depth = depth.saturating_sub(1);
        }
        if !line.is_empty() {
            out.emit_indent(depth);
            out.emit(line);
        }
        if line.ends_with('{') {
            depth += 1;
        }
    }

    out.finish()
}
