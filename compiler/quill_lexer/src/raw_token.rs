//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before it is
//! paired with its source text and span.

use logos::Logos;
use quill_ir::TokenKind;

/// Raw token from logos.
///
/// Whitespace is a real token here, not a skip pattern: the parser uses it
/// to enforce separation between elements.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // Beats Identifier on ties so `-5` is a literal and `-` stays an operator.
    #[regex(r"-?[0-9]+", priority = 3)]
    Number,

    #[regex(r"[a-zA-Z_+\-*/\\=<>!&][a-zA-Z0-9_+\-*/\\=<>!&]*")]
    Identifier,

    #[token("(")]
    Open,
    #[token(")")]
    Close,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
}

impl RawToken {
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::Number => TokenKind::Number,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::Open => TokenKind::Open,
            RawToken::Close => TokenKind::Close,
            RawToken::OpenBrace => TokenKind::OpenBrace,
            RawToken::CloseBrace => TokenKind::CloseBrace,
        }
    }
}
