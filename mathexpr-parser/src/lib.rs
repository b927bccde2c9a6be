//! # mathexpr-parser
//!
//! Lexer, parser and normalizing renderer for a small math expression language
//! (arithmetic, comparisons, vectors, sets and function calls).
//!
//! The pipeline runs strictly forward:
//!
//!     text -> tokens -> ast -> rendered text
//!
//! - [lexing](mathexpr::lexing) turns source text into a pull-based token stream.
//! - [parsing](mathexpr::parsing) is a hand-written recursive descent parser with one token
//!   of lookahead.
//! - [formats](mathexpr::formats) renders trees, most notably the normalized call form in
//!   which every operator becomes an explicit function application.
//! - [pipeline](mathexpr::pipeline) ties the stages together behind `<stage>-<format>` strings.
//!
//! For testing helpers, see the [testing module](mathexpr::testing).

pub mod mathexpr;

pub use mathexpr::error::{Error, Result};
pub use mathexpr::interpret;
