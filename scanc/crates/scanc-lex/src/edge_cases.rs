//! Edge case tests for scanc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Found, LexError, Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = tokenize(source).unwrap().into();
        let eof = tokens.pop().unwrap();
        assert!(eof.is_eof());
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind(), TokenKind::Identifier);
        assert_eq!(t[0].text(), "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1;", name));
        assert_eq!(t[0].text(), name);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("Abc aBC");
        assert_eq!(t[0].text(), "Abc");
        assert_eq!(t[1].text(), "aBC");
    }

    #[test]
    fn test_edge_no_keywords() {
        assert!(kinds("if while return").iter().all(|k| *k == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_all_operators() {
        let t = kinds("+ - * / % = < > ! & | ^ ~ ? :");
        assert_eq!(t.len(), 15);
        assert!(t.iter().all(|k| *k == TokenKind::Operator));
    }

    #[test]
    fn test_edge_operators_are_single_characters() {
        let t = lex_all("<=>=");
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn test_edge_all_separators() {
        let t = kinds("; , ( ) [ ] { }");
        assert_eq!(t.len(), 8);
        assert!(t.iter().all(|k| *k == TokenKind::Separator));
    }

    #[test]
    fn test_edge_dot_is_a_number_not_a_separator() {
        assert_eq!(kinds("a.b"), [TokenKind::Identifier, TokenKind::Number, TokenKind::Identifier]);

        let t = lex_all("a..b");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].kind(), TokenKind::Number);
        assert_eq!(t[1].text(), "..");
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| x.text() == "(").count(), 3);
    }

    #[test]
    fn test_edge_unclassified_characters() {
        let t = lex_all("@#$`\\");
        assert_eq!(t.len(), 5);
        assert!(t.iter().all(|x| x.kind() == TokenKind::Erroneous));
    }

    #[test]
    fn test_edge_non_ascii_is_one_erroneous_token() {
        let t = lex_all("é😀x");
        assert_eq!(t[0].text(), "é");
        assert_eq!(t[1].text(), "😀");
        assert_eq!(t[1].span().len(), 4);
        assert_eq!(t[2].text(), "x");
    }

    #[test]
    fn test_edge_non_ascii_letters_do_not_join_identifiers() {
        let t = lex_all("naïve");
        assert_eq!(t[0].text(), "na");
        assert_eq!(t[1].kind(), TokenKind::Erroneous);
        assert_eq!(t[2].text(), "ve");
    }

    #[test]
    fn test_edge_interior_nul_is_not_end_of_input() {
        let t = lex_all("a\0b");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].kind(), TokenKind::Erroneous);
        assert_eq!(t[1].text(), "\0");
        assert_eq!(t[2].text(), "b");
    }

    #[test]
    fn test_edge_crlf_counts_one_line() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1].span().line, 2);
    }

    #[test]
    fn test_edge_leading_zeros() {
        assert_eq!(lex_all("007")[0].text(), "007");
    }

    #[test]
    fn test_edge_no_exponent() {
        assert_eq!(kinds("1e10"), [TokenKind::Number, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_no_signed_numbers() {
        assert_eq!(kinds("-5"), [TokenKind::Operator, TokenKind::Number]);
    }

    #[test]
    fn test_edge_comment_opener_inside_string() {
        let t = lex_all("\"/* not a comment */\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind(), TokenKind::String);
    }

    #[test]
    fn test_edge_line_comment_opener_in_block_comment() {
        assert_eq!(lex_all("/* // */ x")[0].text(), "x");
    }

    #[test]
    fn test_edge_slash_alone() {
        assert_eq!(kinds("a / b"), [TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_comments_only() {
        assert!(lex_all("// comment\n/* block */\n// another").is_empty());
    }

    #[test]
    fn test_edge_whitespace_variations() {
        let t = lex_all("a\tb\x0Bc\x0Cd\re");
        assert_eq!(t.len(), 5);
        assert!(t.iter().all(|x| x.span().line == 1));
    }

    #[test]
    fn test_edge_many_lines() {
        let source = "x\n".repeat(1000);
        let t = lex_all(&source);
        assert_eq!(t.len(), 1000);
        assert_eq!(t[999].span().line, 1000);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        assert!(matches!(
            tokenize("\"unterminated"),
            Err(LexError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn test_err_unterminated_string_reports_opening_line() {
        let err = tokenize("\n\n\"abc\n\n").unwrap_err();
        assert_eq!(err.span().line, 3);
        assert_eq!(err.span().start, 2);
    }

    #[test]
    fn test_err_empty_char() {
        assert!(matches!(
            tokenize("''"),
            Err(LexError::InvalidCharacterLiteral { .. })
        ));
    }

    #[test]
    fn test_err_char_at_end_of_input() {
        assert_eq!(
            tokenize("'"),
            Err(LexError::InvalidCharacterLiteral {
                found: Found::EndOfInput,
                span: scanc_util::Span::new(0, 1, 1),
            })
        );
    }

    #[test]
    fn test_err_unterminated_char() {
        assert!(matches!(
            tokenize("'x"),
            Err(LexError::UnexpectedCharacter { expected: '\'', .. })
        ));
    }

    #[test]
    fn test_err_unterminated_block_comment() {
        assert!(matches!(
            tokenize("x /* y"),
            Err(LexError::UnterminatedComment { .. })
        ));
    }

    #[test]
    fn test_err_half_block_closer() {
        assert!(tokenize("/* *").is_err());
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let mut scanner = Scanner::new("a = # 1 ''");
        let mut produced = 0;
        let err = loop {
            match scanner.next_token() {
                Ok(Some(_)) => produced += 1,
                Ok(None) => panic!("scanner finished without error"),
                Err(err) => break err,
            }
        };
        assert_eq!(produced, 4);
        assert!(matches!(err, LexError::InvalidCharacterLiteral { .. }));
        assert_eq!(scanner.tokens()[2].kind(), TokenKind::Erroneous);
    }
}
