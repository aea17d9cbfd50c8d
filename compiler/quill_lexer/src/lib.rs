//! Lexer for Quill using logos.
//!
//! Turns one input unit into the token stream the parser consumes. Every
//! byte of the source is covered by exactly one token, whitespace included.

mod raw_token;

use logos::Logos;
use quill_ir::{Span, SpanError, Token};

use raw_token::RawToken;

/// Failure to tokenize an input unit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character no token pattern accepts.
    #[error("unrecognized character `{text}`")]
    UnrecognizedCharacter { text: String, span: Span },
    /// The source does not fit in 32-bit offsets.
    #[error("source too large: {0}")]
    SourceTooLarge(#[from] SpanError),
}

impl LexError {
    /// Location of the offending input, when known.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnrecognizedCharacter { span, .. } => Some(*span),
            LexError::SourceTooLarge(_) => None,
        }
    }
}

/// Lex `source` into tokens, stopping at the first unrecognized character.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::try_from_range(lexer.span())?;
        let text = lexer.slice();
        match result {
            Ok(raw) => tokens.push(Token::new(raw.kind(), text, span)),
            Err(()) => {
                return Err(LexError::UnrecognizedCharacter {
                    text: text.to_owned(),
                    span,
                })
            }
        }
    }

    Ok(tokens)
}
