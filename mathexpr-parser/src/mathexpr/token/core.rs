//! Token definitions for the math expression language
//!
//! The scanner is derived with logos. Whitespace and `#` comments are skipped by the
//! derive itself; every other pattern maps to a [TokenKind]. Operators are listed as
//! plain `#[token]` literals so logos resolves `**`, `<=`, `>=` and `!=` by longest
//! match and never splits them into their one-character prefixes.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// The closed set of operator and punctuation lexemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    // 2 characters
    Power,
    LessEqual,
    GreaterEqual,
    NotEqual,
    // 1 character
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    LessThan,
    GreaterThan,
    LeftCurly,
    LeftParen,
    LeftSquare,
    RightCurly,
    RightParen,
    RightSquare,
    Comma,
}

impl Operator {
    /// Every operator, two-character lexemes first.
    pub const ALL: [Operator; 18] = [
        Operator::Power,
        Operator::LessEqual,
        Operator::GreaterEqual,
        Operator::NotEqual,
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Equal,
        Operator::LessThan,
        Operator::GreaterThan,
        Operator::LeftCurly,
        Operator::LeftParen,
        Operator::LeftSquare,
        Operator::RightCurly,
        Operator::RightParen,
        Operator::RightSquare,
        Operator::Comma,
    ];

    /// The literal source text of this operator.
    pub fn lexeme(self) -> &'static str {
        match self {
            Operator::Power => "**",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::NotEqual => "!=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LeftCurly => "{",
            Operator::LeftParen => "(",
            Operator::LeftSquare => "[",
            Operator::RightCurly => "}",
            Operator::RightParen => ")",
            Operator::RightSquare => "]",
            Operator::Comma => ",",
        }
    }

    /// The snake_case name of this operator (`plus`, `less_equal`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Operator::Power => "power",
            Operator::LessEqual => "less_equal",
            Operator::GreaterEqual => "greater_equal",
            Operator::NotEqual => "not_equal",
            Operator::Plus => "plus",
            Operator::Minus => "minus",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
            Operator::Equal => "equal",
            Operator::LessThan => "less_than",
            Operator::GreaterThan => "greater_than",
            Operator::LeftCurly => "left_curly",
            Operator::LeftParen => "left_paren",
            Operator::LeftSquare => "left_square",
            Operator::RightCurly => "right_curly",
            Operator::RightParen => "right_paren",
            Operator::RightSquare => "right_square",
            Operator::Comma => "comma",
        }
    }

    pub fn from_lexeme(lexeme: &str) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.lexeme() == lexeme)
    }

    /// Whether this operator may join the two sides of a relation.
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            Operator::Equal
                | Operator::LessEqual
                | Operator::GreaterEqual
                | Operator::NotEqual
                | Operator::LessThan
                | Operator::GreaterThan
        )
    }

    /// Whether this operator opens or closes a bracketed group, or separates its items.
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            Operator::LeftCurly
                | Operator::LeftParen
                | Operator::LeftSquare
                | Operator::RightCurly
                | Operator::RightParen
                | Operator::RightSquare
                | Operator::Comma
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

/// What a token is. Only the variants carrying `#[token]`/`#[regex]` attributes are
/// produced by the scanner; `EndOfInput` and `Invalid` are built by the lexer wrapper.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t]+")] // Whitespace, newlines excluded
#[logos(skip r"#[^\r\n]*")] // Line comments
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    #[regex(r"[a-zA-Z_][a-zA-Z_0-9]*")]
    Identifier,

    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    #[token("**", |_| Operator::Power)]
    #[token("<=", |_| Operator::LessEqual)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("!=", |_| Operator::NotEqual)]
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Multiply)]
    #[token("/", |_| Operator::Divide)]
    #[token("=", |_| Operator::Equal)]
    #[token("<", |_| Operator::LessThan)]
    #[token(">", |_| Operator::GreaterThan)]
    #[token("{", |_| Operator::LeftCurly)]
    #[token("(", |_| Operator::LeftParen)]
    #[token("[", |_| Operator::LeftSquare)]
    #[token("}", |_| Operator::RightCurly)]
    #[token(")", |_| Operator::RightParen)]
    #[token("]", |_| Operator::RightSquare)]
    #[token(",", |_| Operator::Comma)]
    Operator(Operator),

    // One token per character, so "\r\n" yields two
    #[regex(r"[\r\n]")]
    NewLine,

    EndOfInput,

    Invalid,
}

impl TokenKind {
    /// The name used when printing tokens (`identifier`, `plus`, `eof`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Operator(op) => op.name(),
            TokenKind::NewLine => "new_line",
            TokenKind::EndOfInput => "eof",
            TokenKind::Invalid => "invalid",
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::Operator(_))
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            TokenKind::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Whether this kind can start an operand (`call` or bare atom).
    pub fn is_operand(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Number)
    }
}

/// A classified lexeme and the byte offset where it starts.
///
/// Tokens are fixed once the lexer produces them and only expose accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// The zero-width token closing every stream.
    pub fn end_of_input(position: usize) -> Self {
        Token::new(TokenKind::EndOfInput, "", position)
    }

    pub fn identifier(name: &str, position: usize) -> Self {
        Token::new(TokenKind::Identifier, name, position)
    }

    pub fn number(digits: &str, position: usize) -> Self {
        Token::new(TokenKind::Number, digits, position)
    }

    pub fn operator(op: Operator, position: usize) -> Self {
        Token::new(TokenKind::Operator(op), op.lexeme(), position)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Byte offset of the first character.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    /// Whether this token is the operator `op`.
    pub fn is(&self, op: Operator) -> bool {
        self.kind == TokenKind::Operator(op)
    }

    pub fn is_new_line(&self) -> bool {
        self.kind == TokenKind::NewLine
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Byte range of the lexeme in the source.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.position..self.position + self.lexeme.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Result<TokenKind, ()>> {
        TokenKind::lexer(source).collect()
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::operator(Operator::LessEqual, 4);
        assert_eq!(token.kind(), TokenKind::Operator(Operator::LessEqual));
        assert_eq!(token.lexeme(), "<=");
        assert_eq!(token.position(), 4);
        assert_eq!(token.span(), 4..6);
        assert_eq!(Token::end_of_input(9).span(), 9..9);
    }

    #[test]
    fn test_two_character_operators_win() {
        assert_eq!(kinds("**"), vec![Ok(TokenKind::Operator(Operator::Power))]);
        assert_eq!(
            kinds("<="),
            vec![Ok(TokenKind::Operator(Operator::LessEqual))]
        );
        assert_eq!(
            kinds(">="),
            vec![Ok(TokenKind::Operator(Operator::GreaterEqual))]
        );
        assert_eq!(kinds("!="), vec![Ok(TokenKind::Operator(Operator::NotEqual))]);
    }

    #[test]
    fn test_three_stars() {
        assert_eq!(
            kinds("***"),
            vec![
                Ok(TokenKind::Operator(Operator::Power)),
                Ok(TokenKind::Operator(Operator::Multiply)),
            ]
        );
    }

    #[test]
    fn test_skips_whitespace_and_comments() {
        assert_eq!(
            kinds("x \t# trailing comment\ny"),
            vec![
                Ok(TokenKind::Identifier),
                Ok(TokenKind::NewLine),
                Ok(TokenKind::Identifier),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let mut lexer = TokenKind::lexer("3.14 42 7.");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.slice(), "3.14");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.slice(), "42");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Number)));
        assert_eq!(lexer.slice(), "7.");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        let mut lexer = TokenKind::lexer("_x1 y_2");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.slice(), "_x1");
        assert_eq!(lexer.next(), Some(Ok(TokenKind::Identifier)));
        assert_eq!(lexer.slice(), "y_2");
    }

    #[test]
    fn test_carriage_return_newline_is_two_tokens() {
        assert_eq!(
            kinds("\r\n"),
            vec![Ok(TokenKind::NewLine), Ok(TokenKind::NewLine)]
        );
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        assert_eq!(kinds("@"), vec![Err(())]);
    }

    #[test]
    fn test_operator_lookup() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_lexeme(op.lexeme()), Some(op));
        }
        assert_eq!(Operator::from_lexeme("!"), None);
    }

    #[test]
    fn test_operator_predicates() {
        let relational: Vec<_> = Operator::ALL
            .into_iter()
            .filter(|op| op.is_relational())
            .collect();
        assert_eq!(relational.len(), 6);
        assert!(!Operator::Plus.is_relational());
        assert!(Operator::Comma.is_punctuation());
        assert!(!Operator::Power.is_punctuation());
    }

    #[test]
    fn test_token_predicates() {
        let plus = Token::operator(Operator::Plus, 0);
        assert!(plus.is_operator());
        assert!(plus.is(Operator::Plus));
        assert!(!plus.is(Operator::Minus));
        assert!(Token::identifier("x", 0).is_identifier());
        assert!(Token::number("1", 0).is_number());
        assert!(Token::end_of_input(3).is_eof());
        assert_eq!(Token::identifier("abc", 4).span(), 4..7);
    }
}
