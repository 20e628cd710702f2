//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Phrase keywords and single-word keywords
//! - Literals (NUMBR, NUMBAR, YARN, TROOF, NOOB)
//! - Line tracking
//! - Line and block comments
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

fn lex(source: &str) -> Vec<super::tokens::Token> {
    tokenize(source.to_string(), Some("test.lol".to_string())).unwrap()
}

#[test]
fn test_tokenize_program_markers() {
    let tokens = lex("HAI\nKTHXBYE");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].value, "HAI");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].value, "KTHXBYE");
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_phrase_keywords() {
    let tokens = lex("I HAS A SUM OF DIFF OF PRODUKT OF QUOSHUNT OF MOD OF BIGGR OF SMALLR OF");
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();

    assert_eq!(
        values,
        vec![
            "I HAS A",
            "SUM OF",
            "DIFF OF",
            "PRODUKT OF",
            "QUOSHUNT OF",
            "MOD OF",
            "BIGGR OF",
            "SMALLR OF",
            "EOF"
        ]
    );
    assert!(tokens[..8].iter().all(|t| t.kind == TokenKind::Keyword));
}

#[test]
fn test_tokenize_phrase_keyword_normalizes_whitespace() {
    let tokens = lex("BOTH   SAEM x AN\ty\nI\tHAS  A z");

    assert_eq!(tokens[0].value, "BOTH SAEM");
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[4].value, "I HAS A");
    assert_eq!(tokens[4].line, 2);
    assert_eq!(tokens[5].value, "z");
}

#[test]
fn test_tokenize_phrase_keyword_needs_word_boundary() {
    let tokens = lex("SUM OFFSET");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "SUM");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "OFFSET");
}

#[test]
fn test_tokenize_punctuated_keywords() {
    let tokens = lex("O RLY?\nWTF?");

    assert_eq!(tokens[0].value, "O RLY?");
    assert_eq!(tokens[1].value, "WTF?");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_tokenize_single_word_keywords() {
    let tokens = lex("VISIBLE GIMMEH ITZ R AN NOT DIFFRINT SMOOSH MKAY WAZZUP BUHBYE");

    assert!(tokens[..11].iter().all(|t| t.kind == TokenKind::Keyword));
    assert_eq!(tokens[11].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords_are_case_sensitive() {
    let tokens = lex("visible an");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = lex("foo bar_2 CamelCase x");

    for (token, expected) in tokens.iter().zip(["foo", "bar_2", "CamelCase", "x"]) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.value, expected);
    }
}

#[test]
fn test_tokenize_numeric_literals() {
    let tokens = lex("42 -7 3.14 -0.5");

    assert_eq!(tokens[0].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::NumberLiteral);
    assert_eq!(tokens[1].value, "-7");
    assert_eq!(tokens[2].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[2].value, "3.14");
    assert_eq!(tokens[3].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[3].value, "-0.5");
}

#[test]
fn test_tokenize_string_literal_keeps_raw_contents() {
    let tokens = lex("VISIBLE \"HAI WORLD:)\" \"say :\"hi:\"\"");

    assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[1].value, "HAI WORLD:)");
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].value, "say :\"hi:\"");
}

#[test]
fn test_tokenize_string_with_keywords_inside() {
    let tokens = lex("\"SUM OF a AN b\"");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, "SUM OF a AN b");
}

#[test]
fn test_tokenize_troof_and_noob_literals() {
    let tokens = lex("WIN FAIL NOOB");

    assert_eq!(tokens[0].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[1].kind, TokenKind::BoolLiteral);
    assert_eq!(tokens[2].kind, TokenKind::NullLiteral);
}

#[test]
fn test_tokenize_plus_symbol() {
    let tokens = lex("x + \"y\"");

    assert_eq!(tokens[1].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].value, "+");
}

#[test]
fn test_tokenize_leading_comment_is_not_inline() {
    let tokens = lex("BTW this program greets\nHAI");

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, "this program greets");
    assert!(!tokens[0].inline);
    assert_eq!(tokens[1].value, "HAI");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_tokenize_trailing_comment_is_inline() {
    let tokens = lex("I HAS A x ITZ 5 BTW five\nBTW standalone");

    assert_eq!(tokens[4].kind, TokenKind::Comment);
    assert_eq!(tokens[4].value, "five");
    assert!(tokens[4].inline);
    assert_eq!(tokens[5].kind, TokenKind::Comment);
    assert!(!tokens[5].inline);
    assert_eq!(tokens[5].line, 2);
}

#[test]
fn test_tokenize_block_comment() {
    let tokens = lex("HAI\nOBTW\nfirst line\nsecond line\nTLDR\nVISIBLE 1");

    assert_eq!(tokens[1].kind, TokenKind::Comment);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[1].value, "first line\nsecond line");
    assert!(!tokens[1].inline);
    assert_eq!(tokens[2].value, "VISIBLE");
    assert_eq!(tokens[2].line, 6);
}

#[test]
fn test_tokenize_unterminated_block_comment_runs_to_end() {
    let tokens = lex("OBTW never closed\nVISIBLE 1");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[1].kind, TokenKind::EOF);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_tokenize_line_numbers_with_blank_lines() {
    let tokens = lex("\r\n\nVISIBLE x\r\n\n\nGIMMEH y");

    assert_eq!(tokens[0].line, 3);
    assert_eq!(tokens[1].line, 3);
    assert_eq!(tokens[2].line, 6);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = lex("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn test_tokenize_unknown_chunks() {
    let tokens = lex("HAI\nVISIBLE @oops x\n12abc");

    assert_eq!(tokens[2].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].value, "@oops");
    assert_eq!(tokens[2].line, 2);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].kind, TokenKind::Unknown);
    assert_eq!(tokens[4].value, "12abc");
    assert_eq!(tokens[4].line, 3);
}

#[test]
fn test_tokenize_unrecognised_token() {
    let result = tokenize("HAI\nVISIBLE x\u{0b}".to_string(), Some("test.lol".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.to_string(), "Line 2: unrecognised token: \"\\u{b}\"");
    assert_eq!(error.line(), 2);
    assert!(!error.is_syntax_error());
}
