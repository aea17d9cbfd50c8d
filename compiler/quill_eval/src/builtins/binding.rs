//! `def`: bind names in the environment.

use quill_ir::{ExprKind, Node, NodeType};
use tracing::debug;

use crate::errors;
use crate::Environment;

/// `def {a b} 1 2` binds `a` to 1 and `b` to 2, returning unit.
///
/// Validation happens before the first binding, so a failed `def` leaves
/// the environment untouched.
pub(super) fn def(env: &mut Environment, args: Vec<Node>) -> Node {
    let mut args = args.into_iter();
    let symbols = match args.next() {
        Some(Node::Expression(expr)) if expr.kind == ExprKind::QExpression => {
            expr.into_elements()
        }
        Some(other) => return errors::incorrect_type(NodeType::QExpression, &other),
        None => return errors::too_few_args("def", 1, 0),
    };

    let mut names = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match symbol {
            Node::Identifier(name) => names.push(name),
            other => return errors::incorrect_type(NodeType::Identifier, &other),
        }
    }

    let values: Vec<Node> = args.collect();
    if values.len() != names.len() {
        // Counts include the symbol list itself.
        return errors::wrong_arg_count(
            names.len().saturating_add(1),
            values.len().saturating_add(1),
        );
    }

    for (name, value) in names.into_iter().zip(values) {
        debug!(%name, %value, "def");
        env.define(name, value);
    }
    Node::unit()
}
