//! Quill IR - shared data model for the Quill interpreter.
//!
//! This crate contains the types every phase agrees on:
//! - Spans for source locations
//! - Tokens produced by the lexer and consumed by the parser
//! - `Node`, the single tagged type used both as syntax tree and as runtime value
//!
//! # Design Philosophy
//!
//! Quill is homoiconic: the parser's output and the evaluator's values share
//! one closed enum. Evaluation failures are `Node::Error` values flowing
//! through the same channel as successful results, never panics.

mod node;
mod span;
mod token;

pub use node::{ErrorDetail, ExprKind, Expression, Node, NodeType};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
