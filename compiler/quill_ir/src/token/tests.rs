use super::*;

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text, Span::new(0, 0))
}

#[test]
fn test_new_token() {
    let token = Token::new(TokenKind::Identifier, "head", Span::new(3, 7));
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text, "head");
    assert_eq!(token.span, Span::new(3, 7));
}

#[test]
fn test_whitespace_detection() {
    assert!(tok(TokenKind::Whitespace, " ").is_whitespace());
    assert!(!tok(TokenKind::Number, "1").is_whitespace());
}

#[test]
fn test_kind_display() {
    assert_eq!(TokenKind::Open.to_string(), "`(`");
    assert_eq!(TokenKind::CloseBrace.to_string(), "`}`");
    assert_eq!(TokenKind::Number.to_string(), "number");
}
