#![deny(clippy::arithmetic_side_effects)]
//! Quill Eval - tree-walking evaluator for Quill.
//!
//! # Architecture
//!
//! - `Environment`: the mutable name-to-value store, passed explicitly to
//!   every evaluation call (no global state)
//! - `evaluate`: total function from `(Node, Environment)` to `Node`;
//!   failures come back as `Node::Error`
//! - `Builtin`: closed set of native operations, dispatched by name from
//!   the head of an S-expression with arity checked up front
//! - `errors`: every evaluation error message in one place

mod builtins;
mod environment;
pub mod errors;
mod interpreter;

pub use builtins::{Arity, Builtin, BuiltinFn};
pub use environment::Environment;
pub use interpreter::{evaluate, evaluate_sexpr};
