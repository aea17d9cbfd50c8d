//! Name bindings for an evaluation session.
//!
//! One flat scope: keys are unique, `def` overwrites, nothing is ever
//! removed. The host creates one `Environment` and threads it by `&mut`
//! through every call, so two sessions never observe each other.
//!
//! `Environment` is `Send` but carries no locking. Hosts that share one
//! across threads wrap it in their own mutex.

use rustc_hash::FxHashMap;

use quill_ir::Node;

/// Mutable mapping from identifier to value.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Node>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind `name` to `value`, returning the previous binding if any.
    pub fn define(&mut self, name: impl Into<String>, value: Node) -> Option<Node> {
        self.bindings.insert(name.into(), value)
    }

    /// Look up a binding.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Node> {
        self.bindings.get(name)
    }
}

#[cfg(test)]
mod tests;
