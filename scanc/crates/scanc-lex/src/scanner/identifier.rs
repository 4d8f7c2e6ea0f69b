//! Identifier recognition.

use crate::chars::{is_letter_or_digit, is_underscore};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Consumes an identifier starting at a letter.
    ///
    /// An underscore joins the identifier only when a letter or digit
    /// follows it, so `foo_bar_2` is one identifier while the underscore in
    /// `foo_` is left for the next token.
    pub(super) fn recognize_identifier(&mut self) {
        self.cursor.advance();
        self.eat_letters_and_digits();

        while is_underscore(self.cursor.current()) && is_letter_or_digit(self.cursor.peek(1)) {
            self.cursor.advance();
            self.eat_letters_and_digits();
        }
    }

    fn eat_letters_and_digits(&mut self) {
        while is_letter_or_digit(self.cursor.current()) {
            self.cursor.advance();
        }
    }
}
