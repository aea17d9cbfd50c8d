use quill_ir::{Span, Token, TokenKind};

use super::*;

#[test]
fn test_unexpected_token_message() {
    let err = ParseError::UnexpectedToken(Token::new(TokenKind::Close, ")", Span::new(4, 5)));
    assert_eq!(err.to_string(), "unexpected token in input: )");
    assert_eq!(err.label(), "`)` not allowed here");
}

#[test]
fn test_unexpected_eoi_message() {
    assert_eq!(ParseError::UnexpectedEoi.to_string(), "unexpected end of input");
    assert_eq!(ParseError::UnexpectedEoi.span(), None);
}

#[test]
fn test_invalid_number_message() {
    let token = Token::new(TokenKind::Number, "99999999999999999999", Span::new(2, 22));
    let err = ParseError::InvalidNumber(token);
    assert_eq!(
        err.to_string(),
        "number literal `99999999999999999999` does not fit in a 64-bit integer"
    );
    assert_eq!(err.span(), Some(Span::new(2, 22)));
}
