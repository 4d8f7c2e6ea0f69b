//! String and character literal recognition.
//!
//! Neither literal form has escape sequences. Token text keeps the
//! delimiters.

use scanc_util::Span;

use crate::chars::{is_letter_or_digit, is_string_delimiter};
use crate::error::{Found, LexError, Result};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Consumes `"..."`. Everything up to the next `"` is the body.
    pub(super) fn recognize_string(&mut self) -> Result<()> {
        let start = self.cursor.position();
        let line = self.cursor.line();

        self.expect_character(b'"')?;

        while !is_string_delimiter(self.cursor.current()) {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedString {
                    span: Span::new(start, self.cursor.position(), line),
                });
            }
            self.cursor.advance();
        }

        self.expect_character(b'"')
    }

    /// Consumes `'c'` where `c` is exactly one letter or digit.
    pub(super) fn recognize_character(&mut self) -> Result<()> {
        let start = self.cursor.position();
        let line = self.cursor.line();

        self.expect_character(b'\'')?;

        if !is_letter_or_digit(self.cursor.current()) {
            return Err(LexError::InvalidCharacterLiteral {
                found: Found::at(&self.cursor),
                span: Span::new(start, self.cursor.position(), line),
            });
        }
        self.cursor.advance();

        self.expect_character(b'\'')
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Found;
    use crate::{LexError, Scanner, TokenKind};
    use scanc_util::Span;

    #[test]
    fn test_string_keeps_quotes() {
        let stream = Scanner::new("\"hi\"").scan_all().unwrap();
        assert_eq!(stream.len(), 2);
        assert_eq!(stream[0].kind(), TokenKind::String);
        assert_eq!(stream[0].text(), "\"hi\"");
    }

    #[test]
    fn test_empty_string() {
        let stream = Scanner::new("\"\"").scan_all().unwrap();
        assert_eq!(stream[0].text(), "\"\"");
    }

    #[test]
    fn test_string_has_no_escapes() {
        // the backslash does not protect the quote
        let stream = Scanner::new(r#""a\"b"#).scan_all().unwrap();
        assert_eq!(stream[0].text(), r#""a\""#);
        assert_eq!(stream[1].kind(), TokenKind::Identifier);
        assert_eq!(stream[1].text(), "b");

        let result = Scanner::new(r#""a\"b""#).scan_all();
        assert!(matches!(result, Err(LexError::UnterminatedString { .. })));
    }

    #[test]
    fn test_string_spans_lines() {
        let stream = Scanner::new("\"a\nb\" c").scan_all().unwrap();
        assert_eq!(stream[0].text(), "\"a\nb\"");
        assert_eq!(stream[0].span().line, 1);
        assert_eq!(stream[1].span().line, 2);
    }

    #[test]
    fn test_string_with_non_ascii_body() {
        let stream = Scanner::new("\"héllo\"").scan_all().unwrap();
        assert_eq!(stream[0].text(), "\"héllo\"");
    }

    #[test]
    fn test_unterminated_string() {
        let err = Scanner::new("x \"abc").scan_all().unwrap_err();
        assert_eq!(
            err,
            LexError::UnterminatedString {
                span: Span::new(2, 6, 1)
            }
        );
    }

    #[test]
    fn test_character_literal() {
        let stream = Scanner::new("'a' '7'").scan_all().unwrap();
        assert_eq!(stream[0].kind(), TokenKind::Character);
        assert_eq!(stream[0].text(), "'a'");
        assert_eq!(stream[1].text(), "'7'");
    }

    #[test]
    fn test_empty_character_literal_is_fatal() {
        let err = Scanner::new("''").scan_all().unwrap_err();
        assert_eq!(
            err,
            LexError::InvalidCharacterLiteral {
                found: Found::Char('\''),
                span: Span::new(0, 1, 1),
            }
        );
    }

    #[test]
    fn test_non_alphanumeric_character_literal_is_fatal() {
        let err = Scanner::new("'+'").scan_all().unwrap_err();
        assert!(matches!(
            err,
            LexError::InvalidCharacterLiteral { found: Found::Char('+'), .. }
        ));
    }

    #[test]
    fn test_multi_character_literal_is_fatal() {
        let err = Scanner::new("'ab'").scan_all().unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                expected: '\'',
                found: Found::Char('b'),
                span: Span::point(2, 1),
            }
        );
    }

    #[test]
    fn test_unclosed_character_literal_at_end() {
        let err = Scanner::new("'a").scan_all().unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter { found: Found::EndOfInput, .. }
        ));
    }
}
