//! Recursive descent parser

use super::error::{Expected, ParseError, Rule};
use crate::mathexpr::ast::{Apply, Atom, Node, Relation, Sequence, Set, Vector};
use crate::mathexpr::error::Result;
use crate::mathexpr::lexing::Lexer;
use crate::mathexpr::token::{Operator, Token};

/// Deepest nesting of expressions the parser accepts.
///
/// Every bracketed group, unary sign and exponent opens one level. Input nested deeper
/// is rejected with [ErrorCode::NestingTooDeep](super::error::ErrorCode::NestingTooDeep),
/// which also bounds the depth of every tree handed out by the parser.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser state: the token stream and the one token of lookahead.
pub struct Parser<'source> {
    tokens: Lexer<'source>,
    current_token: Token,
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a parser positioned on the first token of `source`.
    pub fn new(source: &'source str) -> Result<Self> {
        let mut tokens = Lexer::new(source);
        let current_token = Self::pull(&mut tokens)?;
        Ok(Parser {
            tokens,
            current_token,
            depth: 0,
        })
    }

    /// The lookahead token.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Parse the whole input into a single root node.
    pub fn parse(mut self) -> Result<Node> {
        self.program()
    }

    fn pull(tokens: &mut Lexer<'source>) -> Result<Token> {
        match tokens.next() {
            Some(token) => Ok(token?),
            // Past the end the stream keeps answering end of input
            None => Ok(Token::end_of_input(tokens.source().len())),
        }
    }

    /// Move to the next token, returning the one just consumed.
    fn forward(&mut self) -> Result<Token> {
        let next = Self::pull(&mut self.tokens)?;
        Ok(std::mem::replace(&mut self.current_token, next))
    }

    fn error(&self, rule: Rule, expected: Expected) -> ParseError {
        ParseError::unexpected(rule, expected, self.current_token.clone())
    }

    /// Consume the closing delimiter `op` or fail.
    fn expect(&mut self, op: Operator, rule: Rule) -> Result<Token> {
        if self.current_token.is(op) {
            self.forward()
        } else {
            Err(self.error(rule, Expected::Delimiter(op)).into())
        }
    }

    /// Open one nesting level. A failed parse is abandoned, so levels are only
    /// closed again on success.
    fn descend(&mut self) -> Result<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            let token = self.current_token.clone();
            let err = ParseError::nesting_too_deep(Rule::Primary, MAX_NESTING_DEPTH, token);
            return Err(err.into());
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn at_any(&self, ops: &[Operator]) -> bool {
        ops.iter().any(|op| self.current_token.is(*op))
    }

    // ===== Statements =====

    /// program := statement*
    fn program(&mut self) -> Result<Node> {
        let mut statements = Vec::new();
        while !self.current_token.is_eof() {
            statements.push(self.statement()?);
        }

        Ok(match statements.len() {
            0 => Node::Empty,
            1 => statements.remove(0),
            _ => Sequence::new(statements).into(),
        })
    }

    /// statement := equality newline* | newline+
    fn statement(&mut self) -> Result<Node> {
        if self.current_token.is_new_line() {
            return self.empty();
        }

        let node = self.equality()?;
        while self.current_token.is_new_line() {
            self.forward()?;
        }
        Ok(node)
    }

    /// equality := expr relational_op expr
    fn equality(&mut self) -> Result<Node> {
        let left = self.expr()?;

        let is_relational = self
            .current_token
            .kind()
            .operator()
            .is_some_and(Operator::is_relational);
        if !is_relational {
            return Err(self.error(Rule::Equality, Expected::RelationalOperator).into());
        }
        let operator = Atom::call_target(self.forward()?);

        let right = self.expr()?;
        Ok(Relation::new(left, operator, right).into())
    }

    /// empty := newline+
    fn empty(&mut self) -> Result<Node> {
        while self.current_token.is_new_line() {
            self.forward()?;
        }
        Ok(Node::Empty)
    }

    // ===== Expressions =====

    /// expr := set_expr | vector_expr | additive
    fn expr(&mut self) -> Result<Node> {
        self.descend()?;
        let node = if self.current_token.is(Operator::LeftCurly) {
            self.set_expr()?
        } else if self.current_token.is(Operator::LeftSquare) {
            self.vector_expr()?
        } else {
            self.additive()?
        };
        self.ascend();
        Ok(node)
    }

    /// set_expr := '{' arglist '}'
    fn set_expr(&mut self) -> Result<Node> {
        self.expect(Operator::LeftCurly, Rule::SetExpr)?;
        let elements = self.arglist()?;
        self.expect(Operator::RightCurly, Rule::SetExpr)?;
        Ok(Set::new(elements).into())
    }

    /// vector_expr := '[' arglist ']'
    fn vector_expr(&mut self) -> Result<Node> {
        self.expect(Operator::LeftSquare, Rule::VectorExpr)?;
        let elements = self.arglist()?;
        self.expect(Operator::RightSquare, Rule::VectorExpr)?;
        Ok(Vector::new(elements).into())
    }

    /// additive := multiplicative (('+' | '-') multiplicative)*
    fn additive(&mut self) -> Result<Node> {
        let mut node = self.multiplicative()?;
        while self.at_any(&[Operator::Plus, Operator::Minus]) {
            let function = Atom::call_target(self.forward()?);
            let right = self.multiplicative()?;
            node = Apply::new(function, vec![node, right]).into();
        }
        Ok(node)
    }

    /// multiplicative := unary (('*' | '/') unary)*
    fn multiplicative(&mut self) -> Result<Node> {
        let mut node = self.unary()?;
        while self.at_any(&[Operator::Multiply, Operator::Divide]) {
            let function = Atom::call_target(self.forward()?);
            let right = self.unary()?;
            node = Apply::new(function, vec![node, right]).into();
        }
        Ok(node)
    }

    /// unary := ('+' | '-') unary | power
    fn unary(&mut self) -> Result<Node> {
        self.descend()?;
        let node = if self.at_any(&[Operator::Plus, Operator::Minus]) {
            let function = Atom::call_target(self.forward()?);
            let operand = self.unary()?;
            Apply::new(function, vec![operand]).into()
        } else {
            self.power()?
        };
        self.ascend();
        Ok(node)
    }

    /// power := primary ('**' unary)?
    fn power(&mut self) -> Result<Node> {
        let base = self.primary()?;
        if self.current_token.is(Operator::Power) {
            let function = Atom::call_target(self.forward()?);
            let exponent = self.unary()?;
            return Ok(Apply::new(function, vec![base, exponent]).into());
        }
        Ok(base)
    }

    /// primary := call | '(' additive ')'
    fn primary(&mut self) -> Result<Node> {
        if self.current_token.is(Operator::LeftParen) {
            self.forward()?;
            let node = self.additive()?;
            self.expect(Operator::RightParen, Rule::Primary)?;
            return Ok(node);
        }
        self.call()
    }

    /// call := (identifier | number) ( '(' arglist? ')' )?
    fn call(&mut self) -> Result<Node> {
        if !self.current_token.kind().is_operand() {
            return Err(self.error(Rule::Primary, Expected::Operand).into());
        }
        let token = self.forward()?;

        if !self.current_token.is(Operator::LeftParen) {
            return Ok(Atom::value(token).into());
        }

        self.forward()?;
        let args = if self.current_token.is(Operator::RightParen) {
            Vec::new()
        } else {
            self.arglist()?
        };
        self.expect(Operator::RightParen, Rule::Call)?;
        Ok(Apply::new(Atom::call_target(token), args).into())
    }

    /// arglist := expr (',' expr)*
    fn arglist(&mut self) -> Result<Vec<Node>> {
        let mut items = vec![self.expr()?];
        while self.current_token.is(Operator::Comma) {
            self.forward()?;
            items.push(self.expr()?);
        }
        Ok(items)
    }
}

/// Parse a complete source text.
pub fn parse(source: &str) -> Result<Node> {
    Parser::new(source)?.parse()
}
