//! Layout and comment elision.
//!
//! One elision pass runs before every dispatch:
//!
//! ```text
//! layout -> [block comment -> layout] -> (line comment -> layout)*
//! ```
//!
//! At most one block comment is elided per pass. A second block comment
//! directly after the first reaches dispatch, which reads its `/` as an
//! operator.

use scanc_util::Span;

use crate::chars::is_comment_closer;
use crate::error::{LexError, Result};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Skips layout, at most one block comment and any run of line comments.
    pub(super) fn skip_layout_and_comment(&mut self) -> Result<()> {
        self.skip_layout();

        if self.cursor.current() == b'/' && self.cursor.peek(1) == b'*' {
            self.skip_block_comment()?;
            self.skip_layout();
        }

        while self.cursor.current() == b'/' && self.cursor.peek(1) == b'/' {
            self.cursor.advance();
            self.cursor.advance();

            while !is_comment_closer(self.cursor.current()) {
                if self.cursor.is_at_end() {
                    return Ok(());
                }
                self.cursor.advance();
            }
            // consume the closer; the cursor counts the line
            self.cursor.advance();

            self.skip_layout();
        }

        Ok(())
    }

    fn skip_layout(&mut self) {
        while self.config().is_layout(self.cursor.current()) {
            self.cursor.advance();
        }
    }

    /// Skips `/* ... */`. No nesting: the first `*/` closes the comment.
    fn skip_block_comment(&mut self) -> Result<()> {
        let start = self.cursor.position();
        let line = self.cursor.line();

        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(LexError::UnterminatedComment {
                    span: Span::new(start, self.cursor.position(), line),
                });
            }
            if self.cursor.current() == b'*' && self.cursor.peek(1) == b'/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}
