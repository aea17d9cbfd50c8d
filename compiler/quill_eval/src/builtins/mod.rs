//! Builtin library.
//!
//! Builtins are a closed enum rather than environment entries: an
//! identifier naming one always dispatches to it, and `def` cannot shadow
//! it. Arity is validated once in [`Builtin::call`] before the
//! implementation runs, so implementations only check operand kinds.

mod arithmetic;
mod binding;
mod list;

use std::fmt;

use quill_ir::Node;
use tracing::debug;

use crate::errors;
use crate::Environment;

/// Native implementation of a builtin. Receives fully evaluated arguments.
pub type BuiltinFn = fn(&mut Environment, Vec<Node>) -> Node;

/// Accepted argument counts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
    Any,
}

/// A named native operation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
    Head,
    Tail,
    List,
    Eval,
    Join,
    Def,
}

impl Builtin {
    /// Look up a builtin by the identifier used to call it.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "+" => Some(Builtin::Add),
            "-" => Some(Builtin::Sub),
            "*" => Some(Builtin::Mul),
            "/" => Some(Builtin::Div),
            "head" => Some(Builtin::Head),
            "tail" => Some(Builtin::Tail),
            "list" => Some(Builtin::List),
            "eval" => Some(Builtin::Eval),
            "join" => Some(Builtin::Join),
            "def" => Some(Builtin::Def),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::List => "list",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Def => "def",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Builtin::Add
            | Builtin::Sub
            | Builtin::Mul
            | Builtin::Div
            | Builtin::Join
            | Builtin::Def => Arity::AtLeast(1),
            Builtin::Head | Builtin::Tail | Builtin::Eval => Arity::Exactly(1),
            Builtin::List => Arity::Any,
        }
    }

    fn function(self) -> BuiltinFn {
        match self {
            Builtin::Add => arithmetic::add,
            Builtin::Sub => arithmetic::sub,
            Builtin::Mul => arithmetic::mul,
            Builtin::Div => arithmetic::div,
            Builtin::Head => list::head,
            Builtin::Tail => list::tail,
            Builtin::List => list::list,
            Builtin::Eval => list::eval,
            Builtin::Join => list::join,
            Builtin::Def => binding::def,
        }
    }

    /// Check arity, then run the builtin on already-evaluated arguments.
    pub fn call(self, env: &mut Environment, args: Vec<Node>) -> Node {
        if let Some(err) = self.check_arity(args.len()) {
            return err;
        }
        debug!(builtin = self.name(), args = args.len(), "calling builtin");
        (self.function())(env, args)
    }

    fn check_arity(self, got: usize) -> Option<Node> {
        match self.arity() {
            Arity::Exactly(expected) if got != expected => {
                Some(errors::wrong_arg_count(expected, got))
            }
            Arity::AtLeast(min) if got < min => Some(errors::too_few_args(self.name(), min, got)),
            Arity::Exactly(_) | Arity::AtLeast(_) | Arity::Any => None,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
