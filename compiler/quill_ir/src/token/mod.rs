//! Tokens exchanged between the lexer and the parser.

use std::fmt;

use crate::Span;

/// Lexical category of a token.
///
/// The parser relies on these tags, never on the literal characters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Run of spaces, tabs or newlines. Separates elements.
    Whitespace,
    /// Operation or binding name: `+`, `head`, `x`.
    Identifier,
    /// Integer literal: `42`, `-7`.
    Number,
    /// `(`
    Open,
    /// `)`
    Close,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Open => "`(`",
            TokenKind::Close => "`)`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source text and location.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Whitespace separates elements and is otherwise skipped.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

#[cfg(test)]
mod tests;
