//! scanc-lex - Hand-written lexical scanner
//!
//! This crate turns a source buffer into a flat stream of classified tokens.
//! Each token carries its kind, the exact source text it covers and a
//! [`Span`](scanc_util::Span) with its byte range and line.
//!
//! # Overview
//!
//! Scanning is a single left-to-right pass with one byte of lookahead.
//! Before every token the scanner elides layout and comments, then picks a
//! recognizer from the lookahead byte in a fixed priority order:
//!
//! 1. end of input: [`TokenKind::EndOfFile`]
//! 2. letter: [`TokenKind::Identifier`]
//! 3. digit or `.`: [`TokenKind::Number`]
//! 4. `"`: [`TokenKind::String`]
//! 5. `'`: [`TokenKind::Character`]
//! 6. operator character: [`TokenKind::Operator`]
//! 7. newline: no token, the line counter advances
//! 8. separator character: [`TokenKind::Separator`]
//! 9. anything else: [`TokenKind::Erroneous`]
//!
//! Unclassified characters are soft errors and scanning continues. Broken
//! literals and unterminated comments are fatal and reported as
//! [`LexError`].
//!
//! # Example Usage
//!
//! ```
//! use scanc_lex::{tokenize, TokenKind};
//!
//! let stream = tokenize("sum = a + 3.5; // total").unwrap();
//! let kinds = stream.kinds();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Number,
//!         TokenKind::Separator,
//!         TokenKind::EndOfFile,
//!     ]
//! );
//! assert_eq!(stream[4].text(), "3.5");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and tokens
//! - [`stream`] - The ordered token sequence
//! - [`scanner`] - Elision, dispatch and recognizers
//! - [`cursor`] - Byte cursor with line tracking
//! - [`chars`] - Character class predicates
//! - [`config`] - Scanner options
//! - [`error`] - Fatal scanning errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod stream;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::{NewlineMode, ScannerConfig};
pub use cursor::Cursor;
pub use error::{Found, LexError, Result};
pub use scanner::Scanner;
pub use stream::TokenStream;
pub use token::{Token, TokenKind, END_OF_FILE_TEXT};

/// Scans a whole buffer with the default configuration.
///
/// Returns the complete stream, always terminated by one
/// [`TokenKind::EndOfFile`] token, or the first fatal error.
pub fn tokenize(source: &str) -> Result<TokenStream> {
    Scanner::new(source).scan_all()
}

/// Scans a whole buffer with an explicit configuration.
pub fn tokenize_with(source: &str, config: ScannerConfig) -> Result<TokenStream> {
    Scanner::with_config(source, config).scan_all()
}
