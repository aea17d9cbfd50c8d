//! Syntax tree nodes and runtime values.
//!
//! `Node` is a closed sum type: the parser builds it, the evaluator consumes
//! and produces it. Every dispatch site matches exhaustively, so adding a
//! variant is a compile error until each phase handles it.

mod dump;

use std::fmt;
use std::mem;

use quill_stack::ensure_sufficient_stack;

/// Whether an expression is evaluated eagerly or kept as data.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// `(op a b)`: head names an operation, tail elements are its operands.
    SExpression,
    /// `{a b}`: a literal list. Inert under evaluation.
    QExpression,
}

/// A combination of nodes.
///
/// Nesting depth is bounded only by the input, so the recursive trait
/// impls below grow the stack on demand and `Drop` flattens iteratively.
#[derive(Debug)]
pub struct Expression {
    pub kind: ExprKind,
    pub elements: Vec<Node>,
}

impl Expression {
    pub fn new(kind: ExprKind, elements: Vec<Node>) -> Self {
        Expression { kind, elements }
    }

    pub fn sexpr(elements: Vec<Node>) -> Self {
        Expression::new(ExprKind::SExpression, elements)
    }

    pub fn qexpr(elements: Vec<Node>) -> Self {
        Expression::new(ExprKind::QExpression, elements)
    }

    /// Take the elements, leaving the expression empty.
    pub fn into_elements(mut self) -> Vec<Node> {
        mem::take(&mut self.elements)
    }
}

impl Clone for Expression {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Expression {
            kind: self.kind,
            elements: self.elements.clone(),
        })
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.kind == other.kind && self.elements == other.elements)
    }
}

impl Eq for Expression {}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.elements);
        while let Some(node) = pending.pop() {
            if let Node::Expression(mut nested) = node {
                pending.append(&mut nested.elements);
            }
        }
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Node::Expression(expr)
    }
}

/// Type tag of a node, used in `IncorrectType` errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeType {
    Number,
    Identifier,
    SExpression,
    QExpression,
    Error,
}

impl NodeType {
    pub fn name(self) -> &'static str {
        match self {
            NodeType::Number => "Number",
            NodeType::Identifier => "Identifier",
            NodeType::SExpression => "S-Expression",
            NodeType::QExpression => "Q-Expression",
            NodeType::Error => "Error",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an evaluation failed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ErrorDetail {
    /// An operand had the wrong node kind.
    #[error("expected {expected}, got {actual}")]
    IncorrectType { expected: NodeType, actual: NodeType },
    /// Any other failure: arity, empty list, unbound symbol, arithmetic.
    #[error("{0}")]
    Message(String),
}

/// A syntax tree node, which is also a runtime value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
    /// Integer literal. Immutable; arithmetic builds new nodes.
    Number(i64),
    /// Reference to an environment binding or a builtin name.
    Identifier(String),
    /// S- or Q-expression.
    Expression(Expression),
    /// First-class error value.
    Error(ErrorDetail),
}

impl Node {
    #[inline]
    pub fn number(value: i64) -> Self {
        Node::Number(value)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier(name.into())
    }

    pub fn sexpr(elements: Vec<Node>) -> Self {
        Node::Expression(Expression::sexpr(elements))
    }

    pub fn qexpr(elements: Vec<Node>) -> Self {
        Node::Expression(Expression::qexpr(elements))
    }

    /// The empty S-expression, returned by operations with no meaningful result.
    pub fn unit() -> Self {
        Node::sexpr(Vec::new())
    }

    pub fn error(detail: ErrorDetail) -> Self {
        Node::Error(detail)
    }

    pub fn message(message: impl Into<String>) -> Self {
        Node::error(ErrorDetail::Message(message.into()))
    }

    pub fn incorrect_type(expected: NodeType, actual: NodeType) -> Self {
        Node::error(ErrorDetail::IncorrectType { expected, actual })
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Number(_) => NodeType::Number,
            Node::Identifier(_) => NodeType::Identifier,
            Node::Expression(expr) => match expr.kind {
                ExprKind::SExpression => NodeType::SExpression,
                ExprKind::QExpression => NodeType::QExpression,
            },
            Node::Error(_) => NodeType::Error,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Node::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Node::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(n) => write!(f, "{n}"),
            Node::Identifier(name) => f.write_str(name),
            Node::Expression(expr) => ensure_sufficient_stack(|| {
                let (open, close) = match expr.kind {
                    ExprKind::SExpression => ('(', ')'),
                    ExprKind::QExpression => ('{', '}'),
                };
                write!(f, "{open}")?;
                for (i, element) in expr.elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "{close}")
            }),
            Node::Error(detail) => write!(f, "Error: {detail}"),
        }
    }
}
