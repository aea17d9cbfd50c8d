//! Node evaluation.
//!
//! `evaluate` never fails outside its return value: every failure is a
//! `Node::Error`, and any error met while evaluating a combination's
//! elements becomes the result of the whole combination, with the
//! remaining elements left unevaluated.

use quill_ir::{ExprKind, Node};
use quill_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors;
use crate::{Builtin, Environment};

/// Evaluate one node.
///
/// - numbers, Q-expressions and errors evaluate to themselves
/// - identifiers evaluate to their binding
/// - S-expressions run their head builtin on their evaluated tail
pub fn evaluate(node: &Node, env: &mut Environment) -> Node {
    match node {
        Node::Number(_) | Node::Error(_) => node.clone(),
        Node::Identifier(name) => env
            .lookup(name)
            .cloned()
            .unwrap_or_else(|| errors::unbound_symbol(name)),
        Node::Expression(expr) => match expr.kind {
            ExprKind::QExpression => node.clone(),
            ExprKind::SExpression => evaluate_sexpr(&expr.elements, env),
        },
    }
}

/// Evaluate `elements` as an S-expression, whatever kind they came from.
///
/// `eval` uses this to run a quoted list as code.
pub fn evaluate_sexpr(elements: &[Node], env: &mut Environment) -> Node {
    ensure_sufficient_stack(|| {
        let Some((head, operands)) = elements.split_first() else {
            return Node::unit();
        };

        let builtin = match resolve_builtin(head, env) {
            Ok(builtin) => builtin,
            Err(err) => return err,
        };

        let mut args = Vec::with_capacity(operands.len());
        for operand in operands {
            let value = evaluate(operand, env);
            if value.is_error() {
                trace!(builtin = builtin.name(), error = %value, "short-circuit");
                return value;
            }
            args.push(value);
        }

        builtin.call(env, args)
    })
}

/// Resolve an S-expression head to the builtin it names.
///
/// An identifier spelling a builtin dispatches directly. Any other head is
/// evaluated first, so a binding whose value is a builtin's identifier
/// (e.g. after `def {plus} (head {+})`) can be called.
fn resolve_builtin(head: &Node, env: &mut Environment) -> Result<Builtin, Node> {
    if let Some(builtin) = head.as_identifier().and_then(Builtin::from_name) {
        return Ok(builtin);
    }

    let value = evaluate(head, env);
    if value.is_error() {
        return Err(value);
    }
    value
        .as_identifier()
        .and_then(Builtin::from_name)
        .ok_or_else(|| errors::not_a_builtin(&value))
}
