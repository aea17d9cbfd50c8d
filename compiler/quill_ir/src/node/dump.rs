//! Indented tree rendering for debugging parse output.

use std::fmt::Write;

use quill_stack::ensure_sufficient_stack;

use super::{ExprKind, Node};

impl Node {
    /// Render the node as an indented tree, one node per line.
    ///
    /// ```text
    /// Expression S
    ///   Identifier +
    ///   Number 1
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        // Writing to a String cannot fail.
        let _ = match self {
            Node::Number(n) => writeln!(out, "{indent}Number {n}"),
            Node::Identifier(name) => writeln!(out, "{indent}Identifier {name}"),
            Node::Error(detail) => writeln!(out, "{indent}Error {detail}"),
            Node::Expression(expr) => ensure_sufficient_stack(|| {
                let tag = match expr.kind {
                    ExprKind::SExpression => 'S',
                    ExprKind::QExpression => 'Q',
                };
                let result = writeln!(out, "{indent}Expression {tag}");
                for element in &expr.elements {
                    element.dump_into(out, depth.saturating_add(1));
                }
                result
            }),
        };
    }
}
