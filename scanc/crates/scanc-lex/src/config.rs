//! Scanner configuration.

use crate::chars::{is_end_of_line, is_layout};

/// How line terminators between tokens are consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NewlineMode {
    /// Newlines are not layout. Dispatch sees them, counts the line,
    /// produces no token and re-runs elision.
    #[default]
    Dispatch,
    /// Newlines are folded into layout and skipped together with other
    /// whitespace.
    Layout,
}

/// Options for a [`Scanner`](crate::Scanner).
///
/// The modes differ in when an elision pass ends. In `Dispatch` mode every
/// newline ends the pass, so a block comment at the start of a line is
/// always skipped. In `Layout` mode one pass runs across newlines, and a
/// block comment met after an earlier comment in that pass reaches dispatch
/// and scans as operators. Input without block comments produces the same
/// stream in both modes.
///
/// ```
/// use scanc_lex::{NewlineMode, ScannerConfig};
///
/// let config = ScannerConfig::new().newline_mode(NewlineMode::Layout);
/// assert_eq!(config.newline_mode, NewlineMode::Layout);
/// assert_eq!(ScannerConfig::default().newline_mode, NewlineMode::Dispatch);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScannerConfig {
    /// Newline handling between tokens.
    pub newline_mode: NewlineMode,
}

impl ScannerConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the newline handling.
    pub fn newline_mode(mut self, mode: NewlineMode) -> Self {
        self.newline_mode = mode;
        self
    }

    /// Layout predicate in effect for this configuration.
    #[inline]
    pub(crate) fn is_layout(&self, c: u8) -> bool {
        match self.newline_mode {
            NewlineMode::Dispatch => is_layout(c),
            NewlineMode::Layout => is_layout(c) || is_end_of_line(c),
        }
    }
}
