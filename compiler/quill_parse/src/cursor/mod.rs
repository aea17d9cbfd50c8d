//! Token cursor for navigating a slice of the token stream.
//!
//! Nested expressions are parsed from sub-slices, so each recursion level
//! gets its own cursor over exactly the tokens between its delimiters.

use quill_ir::{Token, TokenKind};

pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current token, or `None` once the slice is exhausted.
    #[inline]
    pub(crate) fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Tokens from the current position to the end of the slice.
    #[inline]
    pub(crate) fn remaining(&self) -> &'a [Token] {
        self.tokens.get(self.pos..).unwrap_or_default()
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_by(1);
    }

    pub(crate) fn advance_by(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.tokens.len());
    }

    /// Skip a run of whitespace. Returns `true` if anything was skipped.
    pub(crate) fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.current().is_some_and(Token::is_whitespace) {
            self.advance();
        }
        self.pos != start
    }
}

/// Index of the delimiter closing `tokens[0]`, found with a depth counter.
///
/// Only `open`/`close` kinds affect the depth; other delimiters are checked
/// when the enclosed range is parsed.
pub(crate) fn find_matching_close(
    tokens: &[Token],
    open: TokenKind,
    close: TokenKind,
) -> Option<usize> {
    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        if token.kind == open {
            depth = depth.saturating_add(1);
        } else if token.kind == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests;
