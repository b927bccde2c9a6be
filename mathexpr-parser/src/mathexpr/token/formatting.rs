//! Printing tokens and turning token lists back into source text

use super::core::{Operator, Token, TokenKind};
use std::fmt;

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {:?})", self.kind().name(), self.lexeme())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Operator(op) => write!(f, "'{}'", op),
            TokenKind::EndOfInput => f.write_str("end of input"),
            TokenKind::NewLine => f.write_str("newline"),
            other => f.write_str(other.name()),
        }
    }
}

/// Rebuild source text from a token list.
///
/// Operands and binary operators are separated by single spaces; openers are not
/// followed by a space, closers and commas are not preceded by one. `EndOfInput` adds
/// nothing. Comments and original spacing are not recoverable.
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        if token.is_eof() {
            break;
        }
        if let Some(prev) = previous {
            if needs_space(prev, token) {
                result.push(' ');
            }
        }
        result.push_str(token.lexeme());
        previous = Some(token);
    }

    result
}

fn needs_space(prev: &Token, next: &Token) -> bool {
    if prev.is_new_line() || next.is_new_line() {
        return false;
    }
    let opens = |t: &Token| {
        t.is(Operator::LeftParen) || t.is(Operator::LeftSquare) || t.is(Operator::LeftCurly)
    };
    let closes = |t: &Token| {
        t.is(Operator::RightParen)
            || t.is(Operator::RightSquare)
            || t.is(Operator::RightCurly)
            || t.is(Operator::Comma)
    };
    // f(x): no space between a callee and its argument list
    if prev.kind().is_operand() && next.is(Operator::LeftParen) {
        return false;
    }
    !(opens(prev) || closes(next))
}
