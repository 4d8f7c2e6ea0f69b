//! Core scanner implementation.
//!
//! This module contains the [`Scanner`] struct, the dispatch loop and the
//! public entry points. Recognizers for each lexical category live in the
//! sibling modules.

use std::iter::FusedIterator;

use scanc_util::Span;
use tracing::{debug, trace};

use crate::chars::{
    is_character_delimiter, is_digit, is_end_of_line, is_letter, is_operator, is_separator,
    is_string_delimiter,
};
use crate::config::ScannerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};

/// Scanner over one borrowed source buffer.
///
/// Produces one token per call to [`next_token`](Self::next_token) and
/// records it in its [`TokenStream`]. Scanning stops for good after the
/// end-of-file token or after the first fatal [`LexError`].
///
/// # Example
///
/// ```
/// use scanc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("x = 1");
/// let first = scanner.next_token().unwrap().unwrap();
/// assert_eq!(first.kind(), TokenKind::Identifier);
/// assert_eq!(first.text(), "x");
/// ```
#[derive(Debug)]
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    config: ScannerConfig,

    stream: TokenStream,

    /// False once end of file has been produced or scanning failed.
    running: bool,

    /// The fatal error that stopped scanning, replayed on later calls.
    failure: Option<LexError>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    /// Creates a scanner with an explicit configuration.
    pub fn with_config(source: &'a str, config: ScannerConfig) -> Self {
        debug!(bytes = source.len(), ?config, "scanner created");
        Self {
            cursor: Cursor::new(source),
            config,
            stream: TokenStream::new(),
            running: true,
            failure: None,
        }
    }

    /// Scans and records the next token.
    ///
    /// Returns `Ok(None)` once the end-of-file token has been produced.
    /// After a fatal error every further call returns that same error.
    pub fn next_token(&mut self) -> Result<Option<&Token>> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if !self.running {
            return Ok(None);
        }

        match self.produce_next_token() {
            Ok(token) => {
                trace!(kind = %token.kind(), text = token.text(), line = token.span().line, "token");
                self.stream.push(token);
                Ok(self.stream.last())
            },
            Err(err) => {
                debug!(error = %err, position = self.cursor.position(), "scan aborted");
                self.running = false;
                self.failure = Some(err.clone());
                Err(err)
            },
        }
    }

    /// Scans to end of input and returns the complete stream.
    ///
    /// On failure the partially built stream is dropped with the scanner.
    pub fn scan_all(mut self) -> Result<TokenStream> {
        while self.next_token()?.is_some() {}
        debug!(tokens = self.stream.len(), lines = self.cursor.line(), "scan finished");
        Ok(self.stream)
    }

    /// Tokens produced so far.
    pub fn tokens(&self) -> &[Token] {
        self.stream.as_slice()
    }

    /// Consumes the scanner, keeping whatever was produced so far.
    pub fn into_stream(self) -> TokenStream {
        self.stream
    }

    /// Byte offset of the lookahead character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Current line number (1-based): one more than the newlines consumed.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Lookahead byte, `0` at end of input.
    pub fn current_char(&self) -> u8 {
        self.cursor.current()
    }

    /// False once end of file has been produced or a fatal error occurred.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The configuration this scanner was built with.
    pub fn config(&self) -> ScannerConfig {
        self.config
    }

    /// Elides layout and comments, then dispatches until a token comes out.
    fn produce_next_token(&mut self) -> Result<Token> {
        loop {
            self.skip_layout_and_comment()?;
            if let Some(token) = self.dispatch()? {
                return Ok(token);
            }
        }
    }

    /// Picks a recognizer from the lookahead character.
    ///
    /// Returns `Ok(None)` for a line terminator, which produces no token.
    fn dispatch(&mut self) -> Result<Option<Token>> {
        let start = self.cursor.position();
        let line = self.cursor.line();

        if self.cursor.is_at_end() {
            self.running = false;
            return Ok(Some(Token::end_of_file(start, line)));
        }

        let c = self.cursor.current();
        let kind = if is_letter(c) {
            self.recognize_identifier();
            TokenKind::Identifier
        } else if is_digit(c) || c == b'.' {
            self.recognize_number();
            TokenKind::Number
        } else if is_string_delimiter(c) {
            self.recognize_string()?;
            TokenKind::String
        } else if is_character_delimiter(c) {
            self.recognize_character()?;
            TokenKind::Character
        } else if is_operator(c) {
            self.cursor.advance();
            TokenKind::Operator
        } else if is_end_of_line(c) {
            self.cursor.advance();
            return Ok(None);
        } else if is_separator(c) {
            self.cursor.advance();
            TokenKind::Separator
        } else {
            self.cursor.advance_char();
            TokenKind::Erroneous
        };

        let end = self.cursor.position();
        let text = self.cursor.slice(start, end - start);
        Ok(Some(Token::new(kind, text, Span::new(start, end, line))))
    }

    /// Consumes `expected` or fails naming what was found instead.
    pub(super) fn expect_character(&mut self, expected: u8) -> Result<()> {
        if !self.cursor.is_at_end() && self.cursor.current() == expected {
            self.cursor.advance();
            return Ok(());
        }
        Err(LexError::UnexpectedCharacter {
            expected: char::from(expected),
            found: crate::error::Found::at(&self.cursor),
            span: Span::point(self.cursor.position(), self.cursor.line()),
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token>;

    /// Yields every token including end of file, or the first fatal error,
    /// then nothing.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failure.is_some() {
            return None;
        }
        self.next_token().map(|token| token.cloned()).transpose()
    }
}

impl FusedIterator for Scanner<'_> {}
