//! Character cursor over trimmed source text.
//!
//! The cursor walks the source one `char` at a time, tracking the byte
//! position and the 1-based line and column of the current character. It
//! exposes single-character lookback ([`previous`](Cursor::previous)) and
//! lookahead ([`peek`](Cursor::peek)).
//!
//! Leading and trailing whitespace is excluded from the scan range, but
//! positions are reported against the untrimmed text so diagnostics point at
//! the real file location.

/// Cursor over the scan range of a source string.
///
/// The cursor is [`Copy`]; the scanner snapshots it at the start of each
/// token to know where that token began.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Full source text (positions index into this).
    source: &'a str,
    /// Exclusive end of the scan range (trailing whitespace removed).
    end: usize,
    /// Byte offset of the current character.
    pos: usize,
    /// 1-based line of the current character.
    line: u32,
    /// 1-based column (in characters) of the current character.
    column: u32,
    /// The character consumed by the most recent `advance()`.
    previous: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first non-whitespace character.
    pub fn new(source: &'a str) -> Self {
        let end = source.trim_end().len();
        let start = (source.len() - source.trim_start().len()).min(end);

        let skipped = &source[..start];
        let line = 1 + count_u32(skipped.matches('\n').count());
        let column = 1 + count_u32(skipped.rsplit('\n').next().map_or(0, |l| l.chars().count()));

        Cursor {
            source,
            end,
            pos: start,
            line,
            column,
            previous: None,
        }
    }

    /// Returns the current character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character after the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Returns the most recently consumed character.
    #[inline]
    pub fn previous(&self) -> Option<char> {
        self.previous
    }

    /// Advance past the current character. No-op at end of input.
    pub fn advance(&mut self) {
        let Some(c) = self.current() else {
            return;
        };
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.previous = Some(c);
    }

    /// Advance while `pred` holds for the current character.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.current().is_some_and(&mut pred) {
            self.advance();
        }
    }

    /// Returns `true` once every character in the scan range is consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the current character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or("")
    }

    fn rest(&self) -> &'a str {
        self.source.get(self.pos..self.end).unwrap_or("")
    }
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX - 1)
}
