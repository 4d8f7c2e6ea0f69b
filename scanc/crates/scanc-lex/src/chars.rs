//! Character classification predicates.
//!
//! Each predicate is a pure oracle over a single byte. Dispatch consults
//! them in a fixed priority order, so the sets may overlap (`.` is both a
//! separator and a number starter; the number rule wins).
//!
//! End of input is not a byte class: it is a property of the cursor, so an
//! interior NUL byte is scanned as an ordinary unclassified character.

/// ASCII letters start identifiers.
#[inline]
pub const fn is_letter(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII decimal digits.
#[inline]
pub const fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Letters or digits; the identifier continuation class.
#[inline]
pub const fn is_letter_or_digit(c: u8) -> bool {
    is_letter(c) || is_digit(c)
}

/// `_`, only accepted inside identifiers between alphanumerics.
#[inline]
pub const fn is_underscore(c: u8) -> bool {
    c == b'_'
}

/// Whitespace with no lexical meaning. Newline is deliberately absent; it is
/// handled by [`is_end_of_line`].
#[inline]
pub const fn is_layout(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

/// Line terminator seen by dispatch.
#[inline]
pub const fn is_end_of_line(c: u8) -> bool {
    c == b'\n'
}

/// Terminator of a `//` comment.
#[inline]
pub const fn is_comment_closer(c: u8) -> bool {
    c == b'\n'
}

/// Single-character operators.
#[inline]
pub const fn is_operator(c: u8) -> bool {
    matches!(
        c,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'<' | b'>' | b'!' | b'&' | b'|' | b'^' | b'~'
            | b'?' | b':'
    )
}

/// Single-character separators.
#[inline]
pub const fn is_separator(c: u8) -> bool {
    matches!(
        c,
        b';' | b',' | b'.' | b'(' | b')' | b'[' | b']' | b'{' | b'}'
    )
}

/// Opening and closing delimiter of a string literal.
#[inline]
pub const fn is_string_delimiter(c: u8) -> bool {
    c == b'"'
}

/// Opening and closing delimiter of a character literal.
#[inline]
pub const fn is_character_delimiter(c: u8) -> bool {
    c == b'\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert!(is_letter(b'a'));
        assert!(is_letter(b'Z'));
        assert!(!is_letter(b'_'));
        assert!(!is_letter(b'1'));
        assert!(is_digit(b'0'));
        assert!(is_digit(b'9'));
        assert!(!is_digit(b'a'));
        assert!(is_letter_or_digit(b'q'));
        assert!(is_letter_or_digit(b'4'));
        assert!(!is_letter_or_digit(b'_'));
    }

    #[test]
    fn test_newline_is_not_layout() {
        assert!(is_layout(b' '));
        assert!(is_layout(b'\t'));
        assert!(is_layout(b'\r'));
        assert!(!is_layout(b'\n'));
        assert!(is_end_of_line(b'\n'));
        assert!(is_comment_closer(b'\n'));
    }

    #[test]
    fn test_operator_and_separator_sets_are_disjoint() {
        for c in 0u8..=127 {
            assert!(
                !(is_operator(c) && is_separator(c)),
                "byte {c:#04x} is in both sets"
            );
        }
    }

    #[test]
    fn test_underscore_is_unclassified() {
        assert!(is_underscore(b'_'));
        assert!(!is_operator(b'_'));
        assert!(!is_separator(b'_'));
        assert!(!is_layout(b'_'));
    }

    #[test]
    fn test_delimiters() {
        assert!(is_string_delimiter(b'"'));
        assert!(!is_string_delimiter(b'\''));
        assert!(is_character_delimiter(b'\''));
        assert!(!is_character_delimiter(b'"'));
    }

    #[test]
    fn test_nul_is_unclassified() {
        assert!(!is_letter(0));
        assert!(!is_layout(0));
        assert!(!is_operator(0));
        assert!(!is_separator(0));
        assert!(!is_end_of_line(0));
    }
}
