//! Core token types shared across the lexer, parser, and tooling.
//!
//!     Tokens are produced by the logos scanner in [core] and carried through the parser
//!     unchanged. Each token records its kind, the exact source slice it was matched from,
//!     and the byte offset where that slice starts.
//!
//!     The kind is decided once, when the token is built: an operator token carries its
//!     [Operator] inside [TokenKind::Operator], so asking "is this an operator?" is a match
//!     on the kind rather than a lookup.

pub mod core;
pub mod formatting;

pub use core::{Operator, Token, TokenKind};
pub use formatting::detokenize;
