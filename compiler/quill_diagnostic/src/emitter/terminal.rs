//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=<mode>` value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source context used to turn spans into `path:line:col` plus a snippet.
struct SourceContext {
    text: String,
    path: Option<String>,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    ///
    /// `is_tty` says whether stderr is a terminal (used for `ColorMode::Auto`).
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels render as `line:col` with a snippet
    /// instead of raw byte offsets.
    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        let path = self.source.take().and_then(|s| s.path);
        self.source = Some(SourceContext {
            text: source.to_string(),
            path,
            lines: LineOffsetTable::build(source),
        });
        self
    }

    /// Set the file path shown in location headers.
    ///
    /// Has no effect until [`with_source`](Self::with_source) is also called;
    /// the two may be chained in either order.
    #[must_use]
    pub fn with_file_path(mut self, path: &str) -> Self {
        match &mut self.source {
            Some(ctx) => ctx.path = Some(path.to_string()),
            None => {
                self.source = Some(SourceContext {
                    text: String::new(),
                    path: Some(path.to_string()),
                    lines: LineOffsetTable::default(),
                });
            }
        }
        self
    }

    /// Consume the emitter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// `error[CODE]: message`
    fn write_header(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{}]", diagnostic.code.as_str()), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    /// Render the location: a `-->` header, and when source text is known,
    /// the offending line with a caret underline.
    fn write_label(&mut self, label: &Label) {
        let Some(ctx) = self.source.as_ref().filter(|ctx| !ctx.text.is_empty()) else {
            let _ = write!(self.writer, "  --> {}: ", label.span);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = ctx.lines.offset_to_line_col(&ctx.text, label.span.start);
        let location = match &ctx.path {
            Some(path) => format!("{path}:{line}:{col}"),
            None => format!("{line}:{col}"),
        };
        let line_text = ctx.lines.line_text(&ctx.text, line).unwrap_or("").to_string();

        // Underline stops at the end of the first line for multi-line spans.
        let line_chars = line_text.chars().count();
        let span_chars = ctx
            .text
            .get(label.span.to_range())
            .map_or(0, |s| s.lines().next().map_or(0, |l| l.chars().count()));
        let start_col = (col as usize).saturating_sub(1).min(line_chars);
        let width = span_chars.min(line_chars.saturating_sub(start_col)).max(1);

        let gutter = " ".repeat(line.to_string().len());
        let _ = writeln!(self.writer, "  --> {location}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");
        let _ = write!(self.writer, "{gutter} | {}", " ".repeat(start_col));
        self.write_colored(&"^".repeat(width), colors::ERROR);
        let _ = write!(self.writer, " ");
        self.write_colored(&label.message, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);

        if let Some(label) = &diagnostic.label {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
