use quill_ir::{Span, Token, TokenKind};

use super::*;

fn tokens(kinds: &[TokenKind]) -> Vec<Token> {
    kinds.iter().map(|&kind| Token::new(kind, "", Span::default())).collect()
}

#[test]
fn test_skip_whitespace_reports_progress() {
    let toks = tokens(&[TokenKind::Whitespace, TokenKind::Whitespace, TokenKind::Number]);
    let mut cursor = Cursor::new(&toks);
    assert!(cursor.skip_whitespace());
    assert_eq!(cursor.current().map(|t| t.kind), Some(TokenKind::Number));
    assert!(!cursor.skip_whitespace());
}

#[test]
fn test_advance_stops_at_end() {
    let toks = tokens(&[TokenKind::Number]);
    let mut cursor = Cursor::new(&toks);
    cursor.advance_by(5);
    assert!(cursor.current().is_none());
    assert!(cursor.remaining().is_empty());
}

#[test]
fn test_find_matching_close_nested() {
    // ( ( ) ( ) ) )
    let toks = tokens(&[
        TokenKind::Open,
        TokenKind::Open,
        TokenKind::Close,
        TokenKind::Open,
        TokenKind::Close,
        TokenKind::Close,
        TokenKind::Close,
    ]);
    assert_eq!(
        find_matching_close(&toks, TokenKind::Open, TokenKind::Close),
        Some(5)
    );
}

#[test]
fn test_find_matching_close_unbalanced() {
    let toks = tokens(&[TokenKind::Open, TokenKind::Open, TokenKind::Close]);
    assert_eq!(
        find_matching_close(&toks, TokenKind::Open, TokenKind::Close),
        None
    );
}

#[test]
fn test_find_matching_brace_ignores_parens() {
    let toks = tokens(&[
        TokenKind::OpenBrace,
        TokenKind::Open,
        TokenKind::CloseBrace,
        TokenKind::Close,
    ]);
    assert_eq!(
        find_matching_close(&toks, TokenKind::OpenBrace, TokenKind::CloseBrace),
        Some(2)
    );
}
