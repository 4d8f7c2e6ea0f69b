//! Byte cursor for traversing source text.
//!
//! The scanner works on a single-byte character model: the lookahead is a
//! `u8`, and end of input reads as the sentinel [`EOF_CHAR`]. The cursor
//! never moves past the end of the buffer, so every loop that calls
//! [`Cursor::advance`] terminates once it checks [`Cursor::is_at_end`].

/// Lookahead value reported at (and beyond) the end of input.
pub const EOF_CHAR: u8 = 0;

/// A cursor over a borrowed source buffer.
///
/// Tracks the byte offset of the lookahead character and the current line.
/// Lines are counted as newline bytes are consumed, wherever that happens
/// (layout, comments, string bodies or the dispatch loop).
///
/// # Example
///
/// ```
/// use scanc_lex::cursor::{Cursor, EOF_CHAR};
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current(), b'a');
/// assert_eq!(cursor.peek(1), b'b');
/// cursor.advance();
/// cursor.advance();
/// assert!(cursor.is_at_end());
/// assert_eq!(cursor.current(), EOF_CHAR);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the lookahead character.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the lookahead byte, or [`EOF_CHAR`] at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead without moving.
    ///
    /// Reads past the end of the buffer yield [`EOF_CHAR`].
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.source
            .as_bytes()
            .get(self.position + offset)
            .copied()
            .unwrap_or(EOF_CHAR)
    }

    /// Returns the full character at the cursor, if any.
    ///
    /// Only used for reporting; scanning decisions are made on bytes.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.position..)?.chars().next()
    }

    /// Advances one byte. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        if self.source.as_bytes()[self.position] == b'\n' {
            self.line += 1;
        }
        self.position += 1;
    }

    /// Advances over one whole character.
    ///
    /// Identical to [`advance`](Self::advance) for ASCII; for a multi-byte
    /// sequence it skips every byte so that the position stays on a
    /// character boundary.
    pub fn advance_char(&mut self) {
        match self.current_char() {
            Some(c) if !c.is_ascii() => self.position += c.len_utf8(),
            _ => self.advance(),
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns an owned copy of `length` bytes starting at `start`.
    ///
    /// Token text is always materialised through this method so that tokens
    /// never borrow from the input buffer.
    ///
    /// ```
    /// use scanc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("let x");
    /// assert_eq!(&*cursor.slice(4, 1), "x");
    /// ```
    pub fn slice(&self, start: usize, length: usize) -> Box<str> {
        Box::from(&self.source[start..start + length])
    }
}
