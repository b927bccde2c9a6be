//! Lexer
//!
//! This module turns source text into a stream of [Token](crate::mathexpr::token::Token)s.
//!
//! Structure:
//!     The character-level work is done by the logos scanner derived on
//!     [TokenKind](crate::mathexpr::token::TokenKind). [Lexer] wraps it into a pull-based
//!     stream that:
//!     - attaches the matched lexeme and byte offset to every token,
//!     - appends exactly one `EndOfInput` token,
//!     - stops for good at the first character no pattern accepts, reporting a [LexError].
//!
//!     The parser pulls from a [Lexer] one token at a time. [tokenize] collects the whole
//!     stream for tools and tests that want it eagerly.

pub mod error;
pub mod lexer;

pub use error::LexError;
pub use lexer::{tokenize, Lexer};
