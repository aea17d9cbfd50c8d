//! Recursive descent parser for Quill.
//!
//! Grammar, after whitespace tokens are discarded (they are still required
//! between adjacent elements):
//!
//! ```text
//! input    = sexpr | "(" sexpr ")"
//! sexpr    = Identifier element*
//! element  = Number | Identifier | "(" sexpr ")" | "{" element* "}"
//! ```
//!
//! Nested delimiters are located with a depth counter and the enclosed
//! sub-range is parsed recursively. Parsing is all-or-nothing.

mod cursor;
mod error;

pub use error::ParseError;

use quill_ir::{Expression, Node, Token, TokenKind};
use quill_stack::ensure_sufficient_stack;
use tracing::trace;

use cursor::{find_matching_close, Cursor};

/// Parse one input unit into an S-expression.
///
/// The expression may be bare (`+ 1 2`) or wrapped in one pair of
/// parentheses (`(+ 1 2)`); both produce the same tree, whose first element
/// is the operation's identifier.
pub fn parse_expression(tokens: &[Token]) -> Result<Expression, ParseError> {
    let mut cursor = Cursor::new(tokens);
    cursor.skip_whitespace();

    let first = cursor.current().ok_or(ParseError::UnexpectedEoi)?;
    if first.kind != TokenKind::Open {
        return parse_sexpr(tokens);
    }

    let (inner, rest) = delimited(cursor.remaining(), TokenKind::Open, TokenKind::Close)?;
    let expr = parse_sexpr(inner)?;

    let mut trailing = Cursor::new(rest);
    trailing.skip_whitespace();
    if let Some(token) = trailing.current() {
        return Err(ParseError::UnexpectedToken(token.clone()));
    }
    Ok(expr)
}

/// Split `tokens` (starting at an `open` delimiter) into the enclosed range
/// and whatever follows the matching `close`.
fn delimited(
    tokens: &[Token],
    open: TokenKind,
    close: TokenKind,
) -> Result<(&[Token], &[Token]), ParseError> {
    let close_index = find_matching_close(tokens, open, close).ok_or(ParseError::UnexpectedEoi)?;
    let inner = tokens.get(1..close_index).unwrap_or_default();
    let rest = tokens.get(close_index + 1..).unwrap_or_default();
    Ok((inner, rest))
}

/// `Identifier element*`
fn parse_sexpr(tokens: &[Token]) -> Result<Expression, ParseError> {
    ensure_sufficient_stack(|| {
        trace!(tokens = tokens.len(), "parse_sexpr");
        let mut cursor = Cursor::new(tokens);
        cursor.skip_whitespace();

        let head = cursor.current().ok_or(ParseError::UnexpectedEoi)?;
        if head.kind != TokenKind::Identifier {
            return Err(ParseError::UnexpectedToken(head.clone()));
        }
        cursor.advance();

        let mut elements = vec![Node::identifier(head.text.as_str())];
        parse_elements(&mut cursor, &mut elements, true)?;
        Ok(Expression::sexpr(elements))
    })
}

/// `element*` inside braces. May be empty.
fn parse_qexpr(tokens: &[Token]) -> Result<Node, ParseError> {
    ensure_sufficient_stack(|| {
        trace!(tokens = tokens.len(), "parse_qexpr");
        let mut cursor = Cursor::new(tokens);
        let mut elements = Vec::new();
        parse_elements(&mut cursor, &mut elements, false)?;
        Ok(Node::qexpr(elements))
    })
}

/// Parse elements until the cursor is exhausted.
///
/// When `needs_separator` is set the first element must also be preceded by
/// whitespace (it follows the head identifier).
fn parse_elements(
    cursor: &mut Cursor<'_>,
    elements: &mut Vec<Node>,
    mut needs_separator: bool,
) -> Result<(), ParseError> {
    loop {
        let separated = cursor.skip_whitespace();
        let Some(token) = cursor.current() else {
            return Ok(());
        };
        if needs_separator && !separated {
            return Err(ParseError::UnexpectedToken(token.clone()));
        }
        elements.push(parse_element(cursor)?);
        needs_separator = true;
    }
}

fn parse_element(cursor: &mut Cursor<'_>) -> Result<Node, ParseError> {
    let token = cursor.current().ok_or(ParseError::UnexpectedEoi)?;
    match token.kind {
        TokenKind::Number => {
            let value = token
                .text
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidNumber(token.clone()))?;
            cursor.advance();
            Ok(Node::number(value))
        }
        TokenKind::Identifier => {
            cursor.advance();
            Ok(Node::identifier(token.text.as_str()))
        }
        TokenKind::Open => {
            let (inner, _) = delimited(cursor.remaining(), TokenKind::Open, TokenKind::Close)?;
            let nested = parse_sexpr(inner)?;
            cursor.advance_by(inner.len() + 2);
            Ok(nested.into())
        }
        TokenKind::OpenBrace => {
            let (inner, _) = delimited(
                cursor.remaining(),
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
            )?;
            let nested = parse_qexpr(inner)?;
            cursor.advance_by(inner.len() + 2);
            Ok(nested)
        }
        TokenKind::Close | TokenKind::CloseBrace | TokenKind::Whitespace => {
            Err(ParseError::UnexpectedToken(token.clone()))
        }
    }
}
