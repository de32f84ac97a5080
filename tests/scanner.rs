use moose::{
    error::LexError,
    interpreter::{
        lexer::scan,
        token::{Token, TokenKind},
    },
};
use pretty_assertions::assert_eq;

/// `(kind, lexeme, line, column)` for every token.
fn summary(source: &str) -> Vec<(TokenKind, String, usize, usize)> {
    scan(source).tokens
                .into_iter()
                .map(|t| (t.kind, t.lexeme, t.line, t.column))
                .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn scans_single_character_tokens() {
    use TokenKind::{EndOfInput, LParen, Minus, Plus, RParen, Slash, Star};

    assert_eq!(kinds("( ) + - * /"),
               [LParen, RParen, Plus, Minus, Star, Slash, EndOfInput]);
}

#[test]
fn records_positions_and_lexemes() {
    use TokenKind::{EndOfInput, LParen, Number, Plus, RParen, Unrecognized};

    assert_eq!(summary("(+ 2 $)"),
               [(LParen, "(".to_string(), 1, 1),
                (Plus, "+".to_string(), 1, 2),
                (Number, "2".to_string(), 1, 4),
                (Unrecognized, "$".to_string(), 1, 6),
                (RParen, ")".to_string(), 1, 7),
                (EndOfInput, String::new(), 1, 8)]);
}

#[test]
fn numbers_carry_their_value() {
    let scan = scan("42 2.75 007");
    let literals: Vec<_> = scan.tokens.iter().map(|t| t.literal).collect();

    assert_eq!(literals, [Some(42.0), Some(2.75), Some(7.0), None]);
    assert_eq!(scan.tokens[1].lexeme, "2.75");
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    use TokenKind::{EndOfInput, Number, Unrecognized};

    assert_eq!(summary("5."),
               [(Number, "5".to_string(), 1, 1),
                (Unrecognized, ".".to_string(), 1, 2),
                (EndOfInput, String::new(), 1, 3)]);
}

#[test]
fn columns_reset_on_new_lines() {
    use TokenKind::{EndOfInput, LParen, Number, Plus, RParen};

    assert_eq!(summary("(+ 1\n  2)"),
               [(LParen, "(".to_string(), 1, 1),
                (Plus, "+".to_string(), 1, 2),
                (Number, "1".to_string(), 1, 4),
                (Number, "2".to_string(), 2, 3),
                (RParen, ")".to_string(), 2, 4),
                (EndOfInput, String::new(), 2, 5)]);
}

#[test]
fn columns_count_characters() {
    let scan = scan("(+ 1 é)");

    assert_eq!(scan.tokens[3].lexeme, "é");
    assert_eq!(scan.tokens[3].column, 6);
    assert_eq!(scan.tokens[4].column, 7);
}

#[test]
fn line_comments_are_skipped() {
    use TokenKind::{EndOfInput, LParen, Number, Plus, RParen};

    assert_eq!(kinds("(+ 2 3) // trailing"),
               [LParen, Plus, Number, Number, RParen, EndOfInput]);
    assert_eq!(scan("(+ 2 3) // trailing").tokens[5].column, 20);
    assert_eq!(summary("// note\n7"),
               [(Number, "7".to_string(), 2, 1), (EndOfInput, String::new(), 2, 2)]);
}

#[test]
fn block_comments_are_skipped_and_keep_positions() {
    use TokenKind::{EndOfInput, Number};

    assert_eq!(summary("/* a\nb */ 5"),
               [(Number, "5".to_string(), 2, 6), (EndOfInput, String::new(), 2, 7)]);

    let scan = scan("/* a\nb */ 5");
    assert_eq!(scan.lines.spans(), [(0, 4), (5, 11)]);
    assert!(scan.issues.is_empty());
}

#[test]
fn unterminated_block_comment_is_reported() {
    let scan = scan("(+ 1 /* oops\n");

    let last_two: Vec<_> = scan.tokens[3..].iter().map(|t| (t.kind, t.line, t.column)).collect();
    assert_eq!(last_two,
               [(TokenKind::Unrecognized, 1, 6), (TokenKind::EndOfInput, 2, 1)]);
    assert_eq!(scan.tokens[3].lexeme, "/* oops\n");
    assert_eq!(scan.issues.len(), 1);
    assert!(matches!(&scan.issues[0], LexError::UnterminatedComment { token } if token.column == 6));
    assert_eq!(scan.issues[0].message(), "unterminated block comment");
}

#[test]
fn overflowing_number_literal_is_reported() {
    let literal = format!("1{}", "0".repeat(400));
    let scan = scan(&format!("(+ {literal} 1)"));

    assert_eq!(scan.tokens[2].kind, TokenKind::Unrecognized);
    assert_eq!(scan.tokens[2].lexeme, literal);
    assert_eq!(scan.tokens[2].literal, None);
    assert_eq!(scan.issues.len(), 1);
    assert!(matches!(&scan.issues[0], LexError::NumberOutOfRange { token } if token.column == 4));
}

#[test]
fn largest_literals_stay_numbers() {
    let scan = scan(&format!("1{}", "0".repeat(308)));

    assert_eq!(scan.tokens[0].kind, TokenKind::Number);
    assert_eq!(scan.tokens[0].literal, Some(1e308));
    assert!(scan.issues.is_empty());
}

#[test]
fn unrecognized_characters_do_not_stop_the_scan() {
    let scan = scan("$ (+ 1 #)");

    let unrecognized: Vec<_> = scan.issues.iter().map(|issue| issue.token().lexeme.clone()).collect();
    assert_eq!(unrecognized, ["$", "#"]);
    assert_eq!(scan.issues[0].message(), "unexpected character '$'");
    assert_eq!(scan.tokens.len(), 7);
}

#[test]
fn exactly_one_end_of_input_terminates_the_sequence() {
    for source in ["", "   ", "(+ 1 2)", "// x", "1\n2\n"] {
        let scan = scan(source);
        let ends = scan.tokens.iter().filter(|t| t.is_end_of_input()).count();

        assert_eq!(ends, 1, "source {source:?}");
        assert!(scan.tokens.last().is_some_and(Token::is_end_of_input));
    }
}

#[test]
fn empty_source_has_one_empty_line() {
    let scan = scan("");

    assert_eq!(scan.tokens, [Token::end_of_input(1, 1)]);
    assert_eq!(scan.lines.spans(), [(0, 0)]);
}

#[test]
fn line_index_quotes_every_line() {
    let source = "(+ 1\r\n   2)\n";
    let scan = scan(source);

    assert_eq!(scan.lines.spans(), [(0, 5), (6, 11), (12, 12)]);
    assert_eq!(scan.lines.line(source, 1), Some("(+ 1"));
    assert_eq!(scan.lines.line(source, 2), Some("   2)"));
    assert_eq!(scan.lines.line(source, 3), Some(""));
    assert_eq!(scan.lines.line(source, 0), None);
    assert_eq!(scan.lines.line(source, 4), None);
}

#[test]
fn scanning_is_deterministic() {
    let source = "(* 2 /* x */ (- 3.5 1) $ // end\n 4)";

    assert_eq!(scan(source), scan(source));
}
