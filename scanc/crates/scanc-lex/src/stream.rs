//! Append-only token sequence.

use std::ops::Index;
use std::slice;

use crate::token::{Token, TokenKind};

/// Tokens in source order.
///
/// Only the scanner appends; callers get read access by index or iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens, the end-of-file token included.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if no token has been produced yet.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Most recently appended token.
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Iterates in source order.
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The kind of every token, in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(Token::kind).collect()
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<TokenStream> for Vec<Token> {
    fn from(stream: TokenStream) -> Self {
        stream.tokens
    }
}
