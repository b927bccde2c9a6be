//! Node definitions

use crate::mathexpr::token::{Operator, Token};
use serde::Serialize;

/// An identifier, a number, or an operator standing in for a function name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Atom {
    token: Token,
    is_call_target: bool,
}

impl Atom {
    pub fn new(token: Token, is_call_target: bool) -> Self {
        Atom {
            token,
            is_call_target,
        }
    }

    /// An atom used as a value.
    pub fn value(token: Token) -> Self {
        Atom::new(token, false)
    }

    /// An atom used as the function of an [Apply] or the operator of a [Relation].
    pub fn call_target(token: Token) -> Self {
        Atom::new(token, true)
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn lexeme(&self) -> &str {
        self.token.lexeme()
    }

    pub fn is_call_target(&self) -> bool {
        self.is_call_target
    }

    pub fn operator(&self) -> Option<Operator> {
        self.token.kind().operator()
    }
}

/// A function or operator applied to its arguments, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Apply {
    function: Atom,
    args: Vec<Node>,
}

impl Apply {
    pub fn new(function: Atom, args: Vec<Node>) -> Self {
        Apply { function, args }
    }

    pub fn function(&self) -> &Atom {
        &self.function
    }

    pub fn args(&self) -> &[Node] {
        &self.args
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// `[e1, e2, ...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vector {
    elements: Vec<Node>,
}

impl Vector {
    pub fn new(elements: Vec<Node>) -> Self {
        Vector { elements }
    }

    pub fn elements(&self) -> &[Node] {
        &self.elements
    }
}

/// `{e1, e2, ...}`. Repeated elements are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Set {
    elements: Vec<Node>,
}

impl Set {
    pub fn new(elements: Vec<Node>) -> Self {
        Set { elements }
    }

    pub fn elements(&self) -> &[Node] {
        &self.elements
    }
}

/// `left <op> right` for one of the six comparison operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
    left: Box<Node>,
    operator: Atom,
    right: Box<Node>,
}

impl Relation {
    pub fn new(left: Node, operator: Atom, right: Node) -> Self {
        Relation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn operator(&self) -> &Atom {
        &self.operator
    }

    pub fn right(&self) -> &Node {
        &self.right
    }
}

/// Two or more top-level statements, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sequence {
    statements: Vec<Node>,
}

impl Sequence {
    pub fn new(statements: Vec<Node>) -> Self {
        Sequence { statements }
    }

    pub fn statements(&self) -> &[Node] {
        &self.statements
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Atom(Atom),
    Apply(Apply),
    Vector(Vector),
    Set(Set),
    Relation(Relation),
    Sequence(Sequence),
    /// A statement made only of blank lines.
    Empty,
}

impl Node {
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Node::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    pub fn as_apply(&self) -> Option<&Apply> {
        match self {
            Node::Apply(apply) => Some(apply),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Node::Vector(vector) => Some(vector),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Node::Set(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Node::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    pub fn is_empty_statement(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Direct children in source order. Function and operator atoms are not children.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Apply(apply) => apply.args(),
            Node::Vector(vector) => vector.elements(),
            Node::Set(set) => set.elements(),
            Node::Sequence(sequence) => sequence.statements(),
            Node::Relation(_) | Node::Atom(_) | Node::Empty => &[],
        }
    }
}

impl From<Atom> for Node {
    fn from(atom: Atom) -> Self {
        Node::Atom(atom)
    }
}

impl From<Apply> for Node {
    fn from(apply: Apply) -> Self {
        Node::Apply(apply)
    }
}

impl From<Vector> for Node {
    fn from(vector: Vector) -> Self {
        Node::Vector(vector)
    }
}

impl From<Set> for Node {
    fn from(set: Set) -> Self {
        Node::Set(set)
    }
}

impl From<Relation> for Node {
    fn from(relation: Relation) -> Self {
        Node::Relation(relation)
    }
}

impl From<Sequence> for Node {
    fn from(sequence: Sequence) -> Self {
        Node::Sequence(sequence)
    }
}
