//! Output formats for parsed trees
//!
//! - [normalized]: the normalized call form, where every operator and call becomes an
//!   explicit function application (`Func("+").eval(atom("1"), atom("2"))`).
//! - [treeviz]: one line per node, for eyeballing a tree's shape.
//!
//! The structural form (`+(1, 2)`) is the [Display](std::fmt::Display) impl of
//! [Node](crate::mathexpr::ast::Node), and JSON goes through serde.

pub mod normalized;
pub mod treeviz;

pub use normalized::{render, OperatorStyle, RenderOptions, Renderer};
pub use treeviz::{to_treeviz_str, DEFAULT_LABEL_WIDTH};
