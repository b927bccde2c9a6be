//! Error types for the parsing pipeline

use crate::mathexpr::lexing::LexError;
use crate::mathexpr::parsing::ParseError;
use thiserror::Error;

/// Everything that can stop a source text from becoming a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Byte offset where the problem starts.
    pub fn offset(&self) -> usize {
        match self {
            Error::Lex(err) => err.offset,
            Error::Parse(err) => err.offset(),
        }
    }

    /// Byte range to highlight in the source.
    pub fn span(&self) -> std::ops::Range<usize> {
        match self {
            Error::Lex(err) => err.span(),
            Error::Parse(err) => err.span(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
