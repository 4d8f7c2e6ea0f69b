//! Number recognition.
//!
//! Numbers are kept as raw text. A dot directly after the leading character
//! is always absorbed, even when the leading character is itself a dot.
//! After that, a digit followed by a dot takes the dot with it, so a run
//! such as `12.5.6` stays one token.

use crate::chars::is_digit;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Consumes a number starting at a digit or a `.`.
    pub(super) fn recognize_number(&mut self) {
        self.cursor.advance();

        if self.cursor.current() == b'.' {
            self.cursor.advance();
            while is_digit(self.cursor.current()) {
                self.cursor.advance();
            }
        }

        while is_digit(self.cursor.current()) {
            if self.cursor.peek(1) == b'.' {
                self.cursor.advance();
            }
            self.cursor.advance();
        }
    }
}
