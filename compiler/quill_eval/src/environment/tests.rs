use quill_ir::Node;

use super::*;

#[test]
fn test_define_lookup() {
    let mut env = Environment::new();
    assert_eq!(env.define("x", Node::number(42)), None);
    assert_eq!(env.lookup("x"), Some(&Node::number(42)));
}

#[test]
fn test_lookup_missing() {
    let env = Environment::new();
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn test_define_overwrites() {
    let mut env = Environment::new();
    env.define("x", Node::number(1));
    let previous = env.define("x", Node::qexpr(vec![Node::number(2)]));
    assert_eq!(previous, Some(Node::number(1)));
    assert_eq!(env.lookup("x"), Some(&Node::qexpr(vec![Node::number(2)])));
}

#[test]
fn test_bindings_are_independent() {
    let mut env = Environment::new();
    env.define("a", Node::number(1));
    env.define("b", Node::number(2));
    assert_eq!(env.lookup("a"), Some(&Node::number(1)));
    assert_eq!(env.lookup("b"), Some(&Node::number(2)));
}

#[test]
fn test_clone_is_independent() {
    let mut env = Environment::new();
    env.define("x", Node::number(1));
    let mut snapshot = env.clone();
    snapshot.define("x", Node::number(2));
    assert_eq!(env.lookup("x"), Some(&Node::number(1)));
}
