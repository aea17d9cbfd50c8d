//! Centralized error constructors for the evaluator.
//!
//! Every evaluation failure is a `Node::Error` built by one of these
//! functions, so message wording lives in a single place.

use quill_ir::{Node, NodeType};

/// Operand of the wrong node kind.
#[cold]
pub fn incorrect_type(expected: NodeType, actual: &Node) -> Node {
    Node::incorrect_type(expected, actual.node_type())
}

#[cold]
pub fn unbound_symbol(name: &str) -> Node {
    Node::message(format!("unbound symbol: {name}"))
}

/// The head of an S-expression did not resolve to a builtin.
#[cold]
pub fn not_a_builtin(head: &Node) -> Node {
    Node::message(format!("S-expression does not start with a builtin: {head}"))
}

/// Exact-arity builtin called with the wrong number of arguments.
#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> Node {
    let noun = if expected == 1 { "argument" } else { "arguments" };
    Node::message(format!("expected {expected} {noun}, got {got}"))
}

/// Variadic builtin called with fewer arguments than its minimum.
#[cold]
pub fn too_few_args(builtin: &str, min: usize, got: usize) -> Node {
    let noun = if min == 1 { "argument" } else { "arguments" };
    Node::message(format!("`{builtin}` expects at least {min} {noun}, got {got}"))
}

/// `head`/`tail` of `{}`.
#[cold]
pub fn empty_list(operation: &str) -> Node {
    Node::message(format!("cannot take {operation} of empty list"))
}

#[cold]
pub fn division_by_zero() -> Node {
    Node::message("division by zero")
}

#[cold]
pub fn integer_overflow() -> Node {
    Node::message("integer overflow")
}
