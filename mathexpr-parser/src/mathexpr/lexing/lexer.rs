//! Pull-based token stream over the logos scanner

use super::error::LexError;
use crate::mathexpr::token::{Token, TokenKind};
use logos::Logos;

/// A lazy, non-resumable token stream.
///
/// Yields `Ok(token)` for each token, then `Ok` of the `EndOfInput` token, then `None`.
/// On an invalid character it yields one `Err` and then `None`.
pub struct Lexer<'source> {
    scanner: logos::Lexer<'source, TokenKind>,
    finished: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            scanner: TokenKind::lexer(source),
            finished: false,
        }
    }

    pub fn source(&self) -> &'source str {
        self.scanner.source()
    }

    /// Scan the next token. Invalid input produces a token of kind
    /// [TokenKind::Invalid] holding the offending character.
    fn scan(&mut self) -> Token {
        match self.scanner.next() {
            Some(Ok(kind)) => Token::new(kind, self.scanner.slice(), self.scanner.span().start),
            Some(Err(())) => {
                let offset = self.scanner.span().start;
                let character = self.source()[offset..].chars().next().unwrap_or_default();
                Token::new(TokenKind::Invalid, character.to_string(), offset)
            }
            None => Token::end_of_input(self.source().len()),
        }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.scan();
        match token.kind() {
            TokenKind::Invalid => {
                self.finished = true;
                let character = token.lexeme().chars().next().unwrap_or_default();
                Some(Err(LexError::new(character, token.position())))
            }
            TokenKind::EndOfInput => {
                self.finished = true;
                Some(Ok(token))
            }
            _ => Some(Ok(token)),
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenize the whole source. The result always ends with the `EndOfInput` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
