//! AST node model
//!
//! A parsed program is a tree of [Node]s. The node set is closed:
//!
//! Expression nodes:
//!     [Atom], [Apply], [Vector], [Set]
//! Statement nodes:
//!     [Sequence], [Relation], `Empty`
//!
//! Trees are built bottom-up by the parser and never mutated afterwards: node fields are
//! private and only exposed through accessors. Every child is owned by exactly one parent.
//!
//! Walking a tree:
//!     - match on [Node] directly, the compiler checks exhaustiveness,
//!     - or implement [Visitor] and call [AstNode::accept] for hook-style traversal.
//!
//! The [Display](std::fmt::Display) impls print the structural form of a tree, which reads
//! like the source: `f(x, 2) >= [1, 2]`. Operator applications are printed with the operator
//! as function name, so `1 + 2` displays as `+(1, 2)`.
//!
//! Display, rendering and traversal recurse once per level. Parsed trees are bounded by
//! [MAX_NESTING_DEPTH](crate::mathexpr::parsing::MAX_NESTING_DEPTH); trees assembled by hand
//! should stay within the same order of depth.

pub mod display;
pub mod node;
pub mod traits;

pub use node::{Apply, Atom, Node, Relation, Sequence, Set, Vector};
pub use traits::{AstNode, Visitor};
