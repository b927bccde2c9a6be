//! Structural pretty-print of a tree

use super::node::{Apply, Atom, Node, Relation, Sequence, Set, Vector};
use std::fmt;

fn join(nodes: &[Node], separator: &str) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

impl fmt::Display for Apply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.function(), join(self.args(), ", "))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", join(self.elements(), ", "))
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", join(self.elements(), ", "))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left(), self.operator(), self.right())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(self.statements(), "\n"))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Atom(atom) => fmt::Display::fmt(atom, f),
            Node::Apply(apply) => fmt::Display::fmt(apply, f),
            Node::Vector(vector) => fmt::Display::fmt(vector, f),
            Node::Set(set) => fmt::Display::fmt(set, f),
            Node::Relation(relation) => fmt::Display::fmt(relation, f),
            Node::Sequence(sequence) => fmt::Display::fmt(sequence, f),
            Node::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathexpr::token::{Operator, Token};

    fn ident(name: &str) -> Node {
        Atom::value(Token::identifier(name, 0)).into()
    }

    fn op(op: Operator) -> Atom {
        Atom::call_target(Token::operator(op, 0))
    }

    #[test]
    fn test_operator_application_uses_lexeme() {
        let node: Node = Apply::new(op(Operator::Plus), vec![ident("a"), ident("b")]).into();
        assert_eq!(node.to_string(), "+(a, b)");
    }

    #[test]
    fn test_containers() {
        let vector: Node = Vector::new(vec![ident("a"), ident("b")]).into();
        let set: Node = Set::new(vec![vector.clone(), ident("c")]).into();
        assert_eq!(vector.to_string(), "[a, b]");
        assert_eq!(set.to_string(), "{[a, b], c}");
    }

    #[test]
    fn test_relation_and_sequence() {
        let relation: Node = Relation::new(ident("x"), op(Operator::LessEqual), ident("y")).into();
        assert_eq!(relation.to_string(), "x <= y");

        let sequence: Node = Sequence::new(vec![Node::Empty, relation.clone(), relation]).into();
        assert_eq!(sequence.to_string(), "\nx <= y\nx <= y");
    }

    #[test]
    fn test_call_with_no_arguments() {
        let call: Node = Apply::new(Atom::call_target(Token::identifier("f", 0)), vec![]).into();
        assert_eq!(call.to_string(), "f()");
    }
}
