//! `+ - * /`: left folds over integer operands.
//!
//! All operands are type-checked before any arithmetic runs. Overflow and
//! division by zero produce error values instead of panicking.

use quill_ir::{Node, NodeType};

use crate::errors;
use crate::Environment;

type Step = fn(i64, i64) -> Result<i64, Node>;

pub(super) fn add(_env: &mut Environment, args: Vec<Node>) -> Node {
    fold(&args, |acc, n| acc.checked_add(n).ok_or_else(errors::integer_overflow))
}

/// One operand negates; more subtract the rest from the first, left to right.
pub(super) fn sub(_env: &mut Environment, args: Vec<Node>) -> Node {
    if let [only] = args.as_slice() {
        return match operand(only) {
            Ok(n) => n.checked_neg().map_or_else(errors::integer_overflow, Node::number),
            Err(err) => err,
        };
    }
    fold(&args, |acc, n| acc.checked_sub(n).ok_or_else(errors::integer_overflow))
}

pub(super) fn mul(_env: &mut Environment, args: Vec<Node>) -> Node {
    fold(&args, |acc, n| acc.checked_mul(n).ok_or_else(errors::integer_overflow))
}

/// Truncating integer division, left to right. A zero divisor is an error.
pub(super) fn div(_env: &mut Environment, args: Vec<Node>) -> Node {
    fold(&args, |acc, n| {
        if n == 0 {
            return Err(errors::division_by_zero());
        }
        acc.checked_div(n).ok_or_else(errors::integer_overflow)
    })
}

fn operand(node: &Node) -> Result<i64, Node> {
    node.as_number()
        .ok_or_else(|| errors::incorrect_type(NodeType::Number, node))
}

fn fold(args: &[Node], step: Step) -> Node {
    let numbers = match args.iter().map(operand).collect::<Result<Vec<_>, _>>() {
        Ok(numbers) => numbers,
        Err(err) => return err,
    };
    let Some((&first, rest)) = numbers.split_first() else {
        // Unreachable through `Builtin::call`, which enforces at least one.
        return errors::too_few_args("arithmetic", 1, 0);
    };
    match rest.iter().try_fold(first, |acc, &n| step(acc, n)) {
        Ok(result) => Node::number(result),
        Err(err) => err,
    }
}
