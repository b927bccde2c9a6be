//! Parse errors

use crate::mathexpr::token::{Operator, Token};
use std::fmt;
use thiserror::Error;

/// Error classes the parser distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnexpectedToken,
    NestingTooDeep,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::UnexpectedToken => f.write_str("Unexpected token"),
            ErrorCode::NestingTooDeep => f.write_str("Nesting too deep"),
        }
    }
}

/// The grammar rule that was being parsed when the error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Equality,
    SetExpr,
    VectorExpr,
    Primary,
    Call,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Equality => "relation",
            Rule::SetExpr => "set",
            Rule::VectorExpr => "vector",
            Rule::Primary => "expression",
            Rule::Call => "call",
        };
        f.write_str(name)
    }
}

/// What would have been accepted instead of the offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// One of `=`, `<=`, `>=`, `!=`, `<`, `>`
    RelationalOperator,
    /// An identifier, a number or `(`
    Operand,
    /// A specific closing delimiter
    Delimiter(Operator),
    /// No more than this many nested groups, unary signs or exponents
    NestingDepth(usize),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::RelationalOperator => f.write_str("a relational operator"),
            Expected::Operand => f.write_str("an identifier, a number or '('"),
            Expected::Delimiter(op) => write!(f, "'{}'", op),
            Expected::NestingDepth(max) => write!(f, "at most {} nesting levels", max),
        }
    }
}

/// A token that cannot legally appear where the parser found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code} {} at offset {}: expected {expected} in {rule}", .token.kind(), .token.position())]
pub struct ParseError {
    pub code: ErrorCode,
    pub rule: Rule,
    pub expected: Expected,
    pub token: Token,
}

impl ParseError {
    pub fn unexpected(rule: Rule, expected: Expected, token: Token) -> Self {
        ParseError {
            code: ErrorCode::UnexpectedToken,
            rule,
            expected,
            token,
        }
    }

    pub fn nesting_too_deep(rule: Rule, max: usize, token: Token) -> Self {
        ParseError {
            code: ErrorCode::NestingTooDeep,
            rule,
            expected: Expected::NestingDepth(max),
            token,
        }
    }

    pub fn offset(&self) -> usize {
        self.token.position()
    }

    /// Byte range of the offending token. Zero-width at end of input.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.token.span()
    }
}
