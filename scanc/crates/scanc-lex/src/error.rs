//! Fatal scanning errors.
//!
//! Every variant stops the scanner: there is no error-token-and-continue
//! path for these cases. Unclassified bytes are not errors at this level;
//! they become [`TokenKind::Erroneous`](crate::TokenKind::Erroneous) tokens.

use std::fmt;

use scanc_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

use crate::cursor::Cursor;

/// What the scanner was looking at when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Found {
    /// A concrete character.
    Char(char),
    /// The end of the buffer.
    EndOfInput,
}

impl Found {
    pub(crate) fn at(cursor: &Cursor<'_>) -> Self {
        match cursor.current_char() {
            Some(c) => Found::Char(c),
            None => Found::EndOfInput,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "`{}`", c.escape_default()),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Error returned when scanning cannot continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A delimiter was required but something else was found.
    #[error("expected `{expected}` but found {found}")]
    UnexpectedCharacter {
        /// The delimiter that was required.
        expected: char,
        /// What was actually there.
        found: Found,
        /// Position of the mismatch.
        span: Span,
    },

    /// A character literal whose body is not a single letter or digit.
    #[error("empty character constant: expected a letter or digit but found {found}")]
    InvalidCharacterLiteral {
        /// What followed the opening quote.
        found: Found,
        /// The literal scanned so far.
        span: Span,
    },

    /// `/*` without a matching `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment {
        /// From the opening delimiter to end of input.
        span: Span,
    },

    /// `"` without a matching `"`.
    #[error("unterminated string literal")]
    UnterminatedString {
        /// From the opening quote to end of input.
        span: Span,
    },
}

impl LexError {
    /// Source location of the failure.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::InvalidCharacterLiteral { span, .. }
            | LexError::UnterminatedComment { span }
            | LexError::UnterminatedString { span } => *span,
        }
    }

    /// Diagnostic code for this error class.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::InvalidCharacterLiteral { .. } => {
                DiagnosticCode::E_LEXER_INVALID_CHAR_LITERAL
            },
            LexError::UnterminatedComment { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }

    /// Converts into a one-line error diagnostic.
    ///
    /// ```
    /// use scanc_lex::tokenize;
    ///
    /// let err = tokenize("\"open").unwrap_err();
    /// assert_eq!(
    ///     err.to_diagnostic().to_string(),
    ///     "error[E1002]: unterminated string literal (line 1, bytes 0..5)"
    /// );
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.span()).with_code(self.code())
    }
}

/// Result alias used throughout the scanner.
pub type Result<T> = std::result::Result<T, LexError>;
