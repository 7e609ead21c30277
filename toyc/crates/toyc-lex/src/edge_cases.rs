//! Edge case tests for toyc-lex

use crate::{tokenize, Lexer, Token, TokenKind, KEYWORDS};
use toyc_util::Handler;

fn lex_all(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    tokenize(source, &handler)
}

fn lex_bytes(source: &[u8]) -> (Vec<Token>, usize) {
    let handler = Handler::new();
    let tokens: Vec<_> = Lexer::from_bytes(source, &handler).collect();
    (tokens, handler.error_count())
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source).iter().map(|t| t.kind).collect()
}

fn pos(token: &Token) -> (u32, u32) {
    (token.line(), token.column())
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    let t = lex_all("");
    assert_eq!(t.len(), 1);
    assert!(t[0].is_eof());
    assert_eq!(pos(&t[0]), (1, 1));
}

#[test]
fn test_edge_keyword_prefix() {
    let t = lex_all("iffy");
    assert_eq!(t[0].kind, TokenKind::Identifier);
    assert_eq!(t[0].text(), Some("iffy"));
}

#[test]
fn test_edge_le_is_one_token() {
    let t = lex_all("<=");
    assert_eq!(t.len(), 2);
    assert_eq!(t[0].kind, TokenKind::Le);
    assert_eq!(t[0].text(), Some("<="));
    assert_eq!(kinds("< ="), vec![TokenKind::Lt, TokenKind::Assign, TokenKind::Eof]);
}

#[test]
fn test_edge_longest_match_runs() {
    assert_eq!(kinds("==="), vec![TokenKind::Eq, TokenKind::Assign, TokenKind::Eof]);
    assert_eq!(kinds("<<="), vec![TokenKind::Lt, TokenKind::Le, TokenKind::Eof]);
    assert_eq!(kinds(">=="), vec![TokenKind::Ge, TokenKind::Assign, TokenKind::Eof]);
    assert_eq!(kinds("&&&&"), vec![TokenKind::And, TokenKind::And, TokenKind::Eof]);
}

#[test]
fn test_edge_string_vs_unterminated() {
    let ok = lex_all("'abc'");
    assert_eq!(ok[0].kind, TokenKind::StringLiteral);
    assert_eq!(ok[0].text(), Some("'abc'"));

    let handler = Handler::new();
    let bad = tokenize("'abc", &handler);
    assert_eq!(bad[0].kind, TokenKind::Error);
    assert_eq!(bad[0].text(), Some("unterminated string"));
    assert!(bad[1].is_eof());
    assert_eq!(bad.len(), 2);
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn test_edge_unterminated_string_across_lines() {
    let t = lex_all("x 'abc\ndef");
    assert_eq!(t[1].kind, TokenKind::Error);
    assert_eq!(pos(&t[1]), (1, 3));
    assert!(t[2].is_eof());
    assert_eq!(pos(&t[2]), (2, 4));
}

#[test]
fn test_edge_newline_resets_column() {
    let t = lex_all("a\nb");
    assert_eq!(pos(&t[0]), (1, 1));
    assert_eq!(pos(&t[1]), (2, 1));
}

#[test]
fn test_edge_crlf_and_tabs() {
    let t = lex_all("a\r\n\tb");
    assert_eq!(pos(&t[1]), (2, 2));
}

#[test]
fn test_edge_position_after_multiline_string() {
    let t = lex_all("'one\ntwo' x");
    assert_eq!(pos(&t[0]), (1, 1));
    assert_eq!(pos(&t[1]), (2, 6));
}

#[test]
fn test_edge_repeated_eof() {
    let handler = Handler::new();
    let mut lexer = Lexer::new("x\n", &handler);
    lexer.next_token();
    let eofs: Vec<_> = (0..5).map(|_| lexer.next_token()).collect();
    assert!(eofs.iter().all(|t| t.is_eof() && t.text().is_none()));
    assert!(eofs.iter().all(|t| pos(t) == (2, 1)));
}

#[test]
fn test_edge_number_then_identifier() {
    let t = lex_all("10abc");
    assert_eq!(t[0].text(), Some("10"));
    assert_eq!(t[1].text(), Some("abc"));
    assert_eq!(pos(&t[1]), (1, 3));
}

#[test]
fn test_edge_negative_number_is_two_tokens() {
    assert_eq!(
        kinds("-5"),
        vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_edge_case_sensitivity() {
    assert_eq!(
        kinds("If WHILE Char"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_edge_all_keywords() {
    let t = kinds("func if else while break int char");
    assert_eq!(
        t,
        vec![
            TokenKind::Func,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Break,
            TokenKind::Int,
            TokenKind::Char,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_err_lone_logical_characters() {
    let (t, errors) = lex_bytes(b"! & |");
    assert_eq!(errors, 3);
    assert_eq!(t.iter().filter(|t| t.is_error()).count(), 3);
    assert!(t.iter().all(|t| t.is_error() || t.is_eof()));
}

#[test]
fn test_err_embedded_nul_is_not_eof() {
    let (t, errors) = lex_bytes(b"a\0b");
    let k: Vec<_> = t.iter().map(|t| t.kind).collect();
    assert_eq!(
        k,
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
    assert_eq!(errors, 1);
}

#[test]
fn test_err_non_ascii_byte() {
    let (t, errors) = lex_bytes("x=é;".as_bytes());
    assert_eq!(t[2].kind, TokenKind::Error);
    assert_eq!(t[3].kind, TokenKind::Error);
    assert_eq!(t[4].kind, TokenKind::Semicolon);
    assert_eq!(pos(&t[4]), (1, 5));
    assert_eq!(errors, 2);
}

#[test]
fn test_err_mixed_valid_invalid() {
    let t = kinds("x # y $ 1");
    assert_eq!(
        t,
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_edge_non_utf8_string_is_lossy() {
    let (t, errors) = lex_bytes(b"'\xFF'");
    assert_eq!(t[0].kind, TokenKind::StringLiteral);
    assert_eq!(t[0].text(), Some("'\u{FFFD}'"));
    assert_eq!(t[0].span.len(), 3);
    assert_eq!(errors, 0);
}

#[test]
fn test_edge_snapshot_determinism() {
    let handler = Handler::new();
    let mut lexer = Lexer::new("while ( x != 'q' ) { }", &handler);
    lexer.next_token();

    let snapshot = lexer.cursor.snapshot();
    let first: Vec<_> = (0..4).map(|_| lexer.next_token()).collect();
    lexer.cursor.restore(snapshot);
    let second: Vec<_> = (0..4).map(|_| lexer.next_token()).collect();

    assert_eq!(first, second);
    assert_eq!(first[2].text(), Some("!="));
}

// ------------------------------------------------------------------------
// PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
// ------------------------------------------------------------------------

#[test]
fn test_property_whitespace_only_is_single_eof() {
    use proptest::prelude::*;

    proptest!(|(input in "[ \t\n\r\x0B\x0C]{0,64}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(tokens[0].is_eof());

        let newlines = input.matches('\n').count() as u32;
        let last_line = input.rsplit('\n').next().unwrap_or_default();
        prop_assert_eq!(tokens[0].line(), 1 + newlines);
        prop_assert_eq!(tokens[0].column(), 1 + last_line.len() as u32);
        prop_assert_eq!(tokens[0].span.start, input.len());
    });
}

#[test]
fn test_eof_after_mixed_whitespace() {
    let t = lex_all("\n  \t");
    assert_eq!(t.len(), 1);
    assert!(t[0].is_eof());
    assert_eq!((t[0].line(), t[0].column()), (2, 4));
}

#[test]
fn test_property_digit_runs_are_one_number() {
    use proptest::prelude::*;

    proptest!(|(input in "[0-9]{1,40}")| {
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(tokens[0].text(), Some(input.as_str()));
        prop_assert_eq!(tokens[0].span.end, input.len());
    });
}

#[test]
fn test_property_keyword_with_suffix_is_identifier() {
    use proptest::prelude::*;

    let keywords: Vec<&str> = KEYWORDS.iter().map(|(k, _)| *k).collect();
    let keyword_strategy = prop::sample::select(keywords);
    proptest!(|(keyword in keyword_strategy, suffix in "[a-zA-Z0-9_]{1,10}")| {
        let input = format!("{}{}", keyword, suffix);
        let tokens = lex_all(&input);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(tokens[0].text(), Some(input.as_str()));
    });
}

#[test]
fn test_property_string_literals_keep_quotes() {
    use proptest::prelude::*;

    proptest!(|(content in "[^']{0,40}")| {
        let source = format!("'{}'", content);
        let tokens = lex_all(&source);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        prop_assert_eq!(tokens[0].text(), Some(source.as_str()));
    });
}

#[test]
fn test_property_arbitrary_bytes_terminate() {
    use proptest::prelude::*;

    proptest!(|(input in prop::collection::vec(any::<u8>(), 0..256))| {
        let handler = Handler::new();
        let mut lexer = Lexer::from_bytes(&input, &handler);
        let mut reached_eof = false;

        // Every non-EOF token consumes at least one byte.
        for _ in 0..=input.len() {
            let before = lexer.position();
            let token = lexer.next_token();
            if token.is_eof() {
                reached_eof = true;
                break;
            }
            prop_assert!(lexer.position() > before);
            prop_assert!(token.span.end <= input.len());
        }
        prop_assert!(reached_eof);
        prop_assert_eq!(lexer.position(), input.len());
    });
}

#[test]
fn test_property_errors_match_error_tokens() {
    use proptest::prelude::*;

    proptest!(|(input in prop::collection::vec(any::<u8>(), 0..128))| {
        let (tokens, errors) = lex_bytes(&input);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_error()).count(), errors);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    });
}

#[test]
fn test_property_deterministic() {
    use proptest::prelude::*;

    proptest!(|(input in prop::collection::vec(any::<u8>(), 0..128))| {
        let (first, _) = lex_bytes(&input);
        let (second, _) = lex_bytes(&input);
        prop_assert_eq!(first, second);
    });
}
