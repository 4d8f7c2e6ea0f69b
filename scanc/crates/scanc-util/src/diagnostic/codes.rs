//! Diagnostic codes for categorizing scanner errors.
//!
//! Codes follow the format `{prefix}{number:04}`; the scanner reserves the
//! `E1xxx` range.
//!
//! ```
//! use scanc_util::diagnostic::DiagnosticCode;
//!
//! assert_eq!(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: a delimiter other than the expected one was found
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: string literal reaches end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: block comment reaches end of input
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);
    /// E1004: character literal body is empty or not alphanumeric
    pub const E_LEXER_INVALID_CHAR_LITERAL: Self = Self::new("E", 1004);
    /// W1001: character outside every lexical class
    pub const W_LEXER_UNCLASSIFIED_CHAR: Self = Self::new("W", 1001);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
