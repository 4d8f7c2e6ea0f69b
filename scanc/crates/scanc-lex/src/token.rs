//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with an owned copy of the lexeme and
//! its [`Span`]. Tokens never borrow from the scanned buffer.

use std::fmt;

use scanc_util::Span;

/// Text carried by the [`TokenKind::EndOfFile`] token.
pub const END_OF_FILE_TEXT: &str = "<END_OF_FILE>";

/// The closed set of token classifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// End of input; always the last token of a stream.
    EndOfFile,
    /// A letter followed by letters, digits and inner underscores.
    Identifier,
    /// Digits and dots, starting with either. Not interpreted.
    Number,
    /// A single operator character.
    Operator,
    /// A single separator character.
    Separator,
    /// A character no other rule accepts.
    Erroneous,
    /// A `"`-delimited literal, quotes included.
    String,
    /// A `'`-delimited single alphanumeric, quotes included.
    Character,
    /// Reserved. The scanner itself never produces it.
    Unknown,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 9] = [
        TokenKind::EndOfFile,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Erroneous,
        TokenKind::String,
        TokenKind::Character,
        TokenKind::Unknown,
    ];

    /// Human-readable name of the kind.
    ///
    /// ```
    /// use scanc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Identifier.name(), "IDENTIFIER");
    /// assert_eq!(TokenKind::EndOfFile.name(), "END_OF_FILE");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "END_OF_FILE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::Erroneous => "ERRONEOUS",
            TokenKind::String => "STRING",
            TokenKind::Character => "CHARACTER",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: Box<str>,
    span: Span,
}

impl Token {
    /// Creates a token from its parts.
    pub fn new(kind: TokenKind, text: impl Into<Box<str>>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The terminal token, positioned at `offset` on `line`.
    pub fn end_of_file(offset: usize, line: u32) -> Self {
        Self::new(
            TokenKind::EndOfFile,
            END_OF_FILE_TEXT,
            Span::point(offset, line),
        )
    }

    /// The token's classification.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text matched (the sentinel for end of file).
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the lexeme sits in the source.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true for the end-of-file token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
