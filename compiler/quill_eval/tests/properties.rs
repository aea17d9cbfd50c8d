//! Property tests for the arithmetic builtins.
//!
//! `+` and `*` must give the same result for any operand order and any
//! grouping; `-` and `/` must be strict left folds.

#![allow(clippy::arithmetic_side_effects, reason = "Operand ranges rule out overflow")]

use proptest::prelude::*;
use quill_eval::{evaluate, Builtin, Environment};
use quill_ir::Node;

fn call(builtin: Builtin, values: &[i64]) -> Node {
    let args = values.iter().copied().map(Node::number).collect();
    builtin.call(&mut Environment::new(), args)
}

fn apply(op: &str, args: Vec<Node>) -> Node {
    let mut elements = vec![Node::identifier(op)];
    elements.extend(args);
    Node::sexpr(elements)
}

fn non_zero() -> impl Strategy<Value = i64> {
    prop_oneof![1i64..50, -50i64..-1]
}

proptest! {
    #[test]
    fn add_ignores_operand_order(mut values in prop::collection::vec(-1_000i64..1_000, 1..8)) {
        let forward = call(Builtin::Add, &values);
        prop_assert_eq!(&forward, &Node::number(values.iter().sum()));
        values.reverse();
        prop_assert_eq!(call(Builtin::Add, &values), forward);
    }

    #[test]
    fn mul_ignores_operand_order(mut values in prop::collection::vec(-20i64..20, 1..6)) {
        let forward = call(Builtin::Mul, &values);
        prop_assert_eq!(&forward, &Node::number(values.iter().product()));
        values.rotate_left(1);
        prop_assert_eq!(call(Builtin::Mul, &values), forward);
    }

    #[test]
    fn add_and_mul_are_associative(a in -1_000i64..1_000, b in -1_000i64..1_000, c in -1_000i64..1_000) {
        for op in ["+", "*"] {
            let left = apply(op, vec![apply(op, vec![Node::number(a), Node::number(b)]), Node::number(c)]);
            let right = apply(op, vec![Node::number(a), apply(op, vec![Node::number(b), Node::number(c)])]);
            let mut env = Environment::new();
            prop_assert_eq!(evaluate(&left, &mut env), evaluate(&right, &mut env));
        }
    }

    #[test]
    fn sub_is_a_left_fold(values in prop::collection::vec(-1_000i64..1_000, 2..8)) {
        let expected = values[1..].iter().fold(values[0], |acc, n| acc - n);
        prop_assert_eq!(call(Builtin::Sub, &values), Node::number(expected));
    }

    #[test]
    fn sub_depends_on_order(a in -1_000i64..1_000, b in -1_000i64..1_000) {
        prop_assert_eq!(call(Builtin::Sub, &[a, b]), Node::number(a - b));
        prop_assert_eq!(call(Builtin::Sub, &[b, a]), Node::number(b - a));
    }

    #[test]
    fn single_sub_negates(a in -1_000i64..1_000) {
        prop_assert_eq!(call(Builtin::Sub, &[a]), Node::number(-a));
    }

    #[test]
    fn div_is_a_left_fold(first in -100_000i64..100_000, divisors in prop::collection::vec(non_zero(), 1..4)) {
        let expected = divisors.iter().fold(first, |acc, n| acc / n);
        let mut values = vec![first];
        values.extend(&divisors);
        prop_assert_eq!(call(Builtin::Div, &values), Node::number(expected));
    }

    #[test]
    fn div_depends_on_order(a in non_zero(), b in non_zero()) {
        prop_assert_eq!(call(Builtin::Div, &[a, b]), Node::number(a / b));
        prop_assert_eq!(call(Builtin::Div, &[b, a]), Node::number(b / a));
    }
}
