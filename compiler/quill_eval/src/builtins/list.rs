//! Q-expression builtins: `head`, `tail`, `list`, `join`, `eval`.

use quill_ir::{ExprKind, Node, NodeType};

use crate::errors;
use crate::interpreter::{evaluate, evaluate_sexpr};
use crate::Environment;

/// Take ownership of a Q-expression's elements, or build the type error.
fn into_qexpr(node: Node) -> Result<Vec<Node>, Node> {
    match node {
        Node::Expression(expr) if expr.kind == ExprKind::QExpression => Ok(expr.into_elements()),
        other => Err(errors::incorrect_type(NodeType::QExpression, &other)),
    }
}

/// The single argument of an exact-arity-1 builtin.
fn single(args: Vec<Node>) -> Node {
    args.into_iter()
        .next()
        .unwrap_or_else(|| errors::wrong_arg_count(1, 0))
}

/// First element, unwrapped.
pub(super) fn head(_env: &mut Environment, args: Vec<Node>) -> Node {
    match into_qexpr(single(args)) {
        Ok(elements) => elements
            .into_iter()
            .next()
            .unwrap_or_else(|| errors::empty_list("head")),
        Err(err) => err,
    }
}

/// Every element but the first, as a new Q-expression.
pub(super) fn tail(_env: &mut Environment, args: Vec<Node>) -> Node {
    match into_qexpr(single(args)) {
        Ok(elements) if elements.is_empty() => errors::empty_list("tail"),
        Ok(elements) => Node::qexpr(elements.into_iter().skip(1).collect()),
        Err(err) => err,
    }
}

/// Quote the evaluated arguments.
pub(super) fn list(_env: &mut Environment, args: Vec<Node>) -> Node {
    Node::qexpr(args)
}

/// Concatenate Q-expressions in argument order.
pub(super) fn join(_env: &mut Environment, args: Vec<Node>) -> Node {
    let mut joined = Vec::new();
    for arg in args {
        match into_qexpr(arg) {
            Ok(elements) => joined.extend(elements),
            Err(err) => return err,
        }
    }
    Node::qexpr(joined)
}

/// Run an expression of either kind as an S-expression; evaluate anything
/// else normally.
pub(super) fn eval(env: &mut Environment, args: Vec<Node>) -> Node {
    match single(args) {
        Node::Expression(expr) => evaluate_sexpr(&expr.elements, env),
        other => evaluate(&other, env),
    }
}
