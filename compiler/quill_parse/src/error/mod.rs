//! Parse error types.
//!
//! Parsing is all-or-nothing: any of these aborts the whole input unit and
//! no partial tree reaches the evaluator.

use quill_ir::{Span, Token};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token the grammar does not permit in this position.
    #[error("unexpected token in input: {}", .0.text)]
    UnexpectedToken(Token),
    /// Input ran out before a required token, including unbalanced delimiters.
    #[error("unexpected end of input")]
    UnexpectedEoi,
    /// A number literal outside the `i64` range.
    #[error("number literal `{}` does not fit in a 64-bit integer", .0.text)]
    InvalidNumber(Token),
}

impl ParseError {
    /// Location of the offending token. `None` for end of input.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedToken(token) | ParseError::InvalidNumber(token) => {
                Some(token.span)
            }
            ParseError::UnexpectedEoi => None,
        }
    }

    /// Short label for the offending location in rendered diagnostics.
    pub fn label(&self) -> String {
        match self {
            ParseError::UnexpectedToken(token) => format!("{} not allowed here", token.kind),
            ParseError::UnexpectedEoi => "input ends here".to_owned(),
            ParseError::InvalidNumber(_) => "out of range".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests;
