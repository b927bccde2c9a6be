//! Lexical errors

use thiserror::Error;

/// The scanner reached a character no token pattern accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid character {character:?} at offset {offset}")]
pub struct LexError {
    pub character: char,
    pub offset: usize,
}

impl LexError {
    pub fn new(character: char, offset: usize) -> Self {
        LexError { character, offset }
    }

    /// Byte range of the offending character.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.character.len_utf8()
    }
}
