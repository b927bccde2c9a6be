//! Test helpers for parser output
//!
//! A fluent assertion API in the same spirit as the node accessors: start from
//! [assert_node] and chain checks down the tree.
//!
//! ```rust,ignore
//! let node = parse("y = f(x, 2)").unwrap();
//! assert_node(&node).relation("=", |left, right| {
//!     left.atom("y");
//!     right.apply("f", 2).arg(0, |a| { a.atom("x"); });
//! });
//! ```

pub mod ast_assertions;

pub use ast_assertions::{assert_node, ApplyAssertion, ContainerAssertion, NodeAssertion};

use crate::mathexpr::ast::Node;
use crate::mathexpr::parsing::parse;

/// Parse `source` or panic with the error message.
pub fn parse_ok(source: &str) -> Node {
    match parse(source) {
        Ok(node) => node,
        Err(err) => panic!("failed to parse {:?}: {}", source, err),
    }
}

/// Parse `source` and panic unless it is rejected.
pub fn parse_err(source: &str) -> crate::mathexpr::error::Error {
    match parse(source) {
        Ok(node) => panic!("expected {:?} to be rejected, parsed as {}", source, node),
        Err(err) => err,
    }
}
