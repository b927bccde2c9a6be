//! Parser
//!
//! A recursive descent parser with a single token of lookahead. Every grammar rule is one
//! method on [Parser]; precedence climbs from `additive` (loosest) down to `primary`.
//!
//! Grammar:
//!
//!     program        := statement*
//!     statement      := equality newline* | newline+
//!     equality       := expr relational_op expr          relational_op in = <= >= != < >
//!     expr           := set_expr | vector_expr | additive
//!     set_expr       := '{' arglist '}'
//!     vector_expr    := '[' arglist ']'
//!     additive       := multiplicative (('+' | '-') multiplicative)*
//!     multiplicative := unary (('*' | '/') unary)*
//!     unary          := ('+' | '-') unary | power
//!     power          := primary ('**' unary)?
//!     primary        := call | '(' additive ')'
//!     call           := (identifier | number) ( '(' arglist? ')' )?
//!     arglist        := expr (',' expr)*
//!
//! Associativity:
//!     `additive` and `multiplicative` fold to the left. `power` takes a `unary` as its
//!     right operand, which makes `**` right associative and lets `2 ** -1` parse. Because
//!     `unary` sits above `power`, `-x ** 2` is `-(x ** 2)`.
//!
//! Statements:
//!     A statement is a relation (with its trailing newlines) or a run of blank lines, which
//!     becomes one `Empty` node. A program of exactly one statement is returned as that
//!     statement; two or more are wrapped in a `Sequence`. A program with no statements at
//!     all (empty or comment-only input) is returned as `Empty`.
//!
//! Errors:
//!     The first token that cannot appear where it is found aborts the parse with a
//!     [ParseError]. Lexical errors surface through the same [Error](crate::Error) type as
//!     soon as the parser pulls the offending token.

pub mod error;
pub mod parser;

pub use error::{ErrorCode, Expected, ParseError, Rule};
pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
