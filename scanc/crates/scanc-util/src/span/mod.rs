//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range `[start, end)` into the scanned
//! buffer together with the 1-based line on which it starts. Spans are plain
//! `Copy` values; they never borrow the source text.

use std::fmt;

/// A region of source text.
///
/// # Examples
///
/// ```
/// use scanc_util::Span;
///
/// let span = Span::new(4, 7, 1);
/// assert_eq!(span.len(), 3);
/// assert!(!span.is_empty());
///
/// let point = Span::point(12, 2);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for testing and for diagnostics without a location.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span covering `start..end` that begins on `line`.
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create an empty span at a single byte offset.
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self::new(offset, offset, line)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Number of bytes covered by the span.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, bytes {}..{}", self.line, self.start, self.end)
    }
}
