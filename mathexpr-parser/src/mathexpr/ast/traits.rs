//! AST traits - common interfaces for uniform node access

use super::node::{Apply, Atom, Node, Relation, Sequence, Set, Vector};

/// Visitor trait for traversing the AST
///
/// Each visit method corresponds to a node kind; `leave_*` runs after the node's children
/// have been visited. Default implementations are empty, so you only need to override the
/// methods you care about.
///
/// The function atom of an [Apply] and the operator atom of a [Relation] are part of their
/// parent and are not visited on their own.
///
/// # Example
///
/// ```ignore
/// struct CallCounter(usize);
///
/// impl Visitor for CallCounter {
///     fn visit_apply(&mut self, _apply: &Apply) {
///         self.0 += 1;
///     }
/// }
///
/// let mut counter = CallCounter(0);
/// root.accept(&mut counter);
/// ```
pub trait Visitor {
    fn visit_atom(&mut self, _atom: &Atom) {}
    fn leave_atom(&mut self, _atom: &Atom) {}

    fn visit_apply(&mut self, _apply: &Apply) {}
    fn leave_apply(&mut self, _apply: &Apply) {}

    fn visit_vector(&mut self, _vector: &Vector) {}
    fn leave_vector(&mut self, _vector: &Vector) {}

    fn visit_set(&mut self, _set: &Set) {}
    fn leave_set(&mut self, _set: &Set) {}

    fn visit_relation(&mut self, _relation: &Relation) {}
    fn leave_relation(&mut self, _relation: &Relation) {}

    fn visit_sequence(&mut self, _sequence: &Sequence) {}
    fn leave_sequence(&mut self, _sequence: &Sequence) {}

    fn visit_empty(&mut self) {}
}

/// Helper function to visit all nodes in a slice
pub fn visit_children(visitor: &mut dyn Visitor, nodes: &[Node]) {
    for node in nodes {
        node.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", n, plural)
    }
}

impl AstNode for Atom {
    fn node_type(&self) -> &'static str {
        "Atom"
    }

    fn display_label(&self) -> String {
        self.lexeme().to_string()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_atom(self);
        visitor.leave_atom(self);
    }
}

impl AstNode for Apply {
    fn node_type(&self) -> &'static str {
        "Apply"
    }

    fn display_label(&self) -> String {
        format!(
            "{} ({})",
            self.function().lexeme(),
            count(self.arity(), "arg", "args")
        )
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_apply(self);
        visit_children(visitor, self.args());
        visitor.leave_apply(self);
    }
}

impl AstNode for Vector {
    fn node_type(&self) -> &'static str {
        "Vector"
    }

    fn display_label(&self) -> String {
        count(self.elements().len(), "element", "elements")
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_vector(self);
        visit_children(visitor, self.elements());
        visitor.leave_vector(self);
    }
}

impl AstNode for Set {
    fn node_type(&self) -> &'static str {
        "Set"
    }

    fn display_label(&self) -> String {
        count(self.elements().len(), "element", "elements")
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_set(self);
        visit_children(visitor, self.elements());
        visitor.leave_set(self);
    }
}

impl AstNode for Relation {
    fn node_type(&self) -> &'static str {
        "Relation"
    }

    fn display_label(&self) -> String {
        self.to_string()
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_relation(self);
        self.left().accept(visitor);
        self.right().accept(visitor);
        visitor.leave_relation(self);
    }
}

impl AstNode for Sequence {
    fn node_type(&self) -> &'static str {
        "Sequence"
    }

    fn display_label(&self) -> String {
        count(self.statements().len(), "statement", "statements")
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_sequence(self);
        visit_children(visitor, self.statements());
        visitor.leave_sequence(self);
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        match self {
            Node::Atom(atom) => atom.node_type(),
            Node::Apply(apply) => apply.node_type(),
            Node::Vector(vector) => vector.node_type(),
            Node::Set(set) => set.node_type(),
            Node::Relation(relation) => relation.node_type(),
            Node::Sequence(sequence) => sequence.node_type(),
            Node::Empty => "Empty",
        }
    }

    fn display_label(&self) -> String {
        match self {
            Node::Atom(atom) => atom.display_label(),
            Node::Apply(apply) => apply.display_label(),
            Node::Vector(vector) => vector.display_label(),
            Node::Set(set) => set.display_label(),
            Node::Relation(relation) => relation.display_label(),
            Node::Sequence(sequence) => sequence.display_label(),
            Node::Empty => String::new(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Node::Atom(atom) => atom.accept(visitor),
            Node::Apply(apply) => apply.accept(visitor),
            Node::Vector(vector) => vector.accept(visitor),
            Node::Set(set) => set.accept(visitor),
            Node::Relation(relation) => relation.accept(visitor),
            Node::Sequence(sequence) => sequence.accept(visitor),
            Node::Empty => visitor.visit_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathexpr::token::{Operator, Token};

    #[derive(Default)]
    struct Trace(Vec<String>);

    impl Visitor for Trace {
        fn visit_atom(&mut self, atom: &Atom) {
            self.0.push(atom.lexeme().to_string());
        }
        fn visit_apply(&mut self, apply: &Apply) {
            self.0.push(format!("apply {}", apply.function().lexeme()));
        }
        fn leave_apply(&mut self, _apply: &Apply) {
            self.0.push("end".to_string());
        }
        fn visit_relation(&mut self, relation: &Relation) {
            self.0.push(format!("relation {}", relation.operator().lexeme()));
        }
    }

    fn num(n: &str) -> Node {
        Atom::value(Token::number(n, 0)).into()
    }

    #[test]
    fn test_accept_walks_in_source_order() {
        let sum = Apply::new(
            Atom::call_target(Token::operator(Operator::Plus, 0)),
            vec![num("1"), num("2")],
        );
        let root: Node = Relation::new(
            num("0"),
            Atom::call_target(Token::operator(Operator::Equal, 0)),
            sum.into(),
        )
        .into();

        let mut trace = Trace::default();
        root.accept(&mut trace);
        assert_eq!(
            trace.0,
            vec!["relation =", "0", "apply +", "1", "2", "end"]
        );
    }

    #[test]
    fn test_labels() {
        let call: Node = Apply::new(
            Atom::call_target(Token::identifier("f", 0)),
            vec![num("1")],
        )
        .into();
        assert_eq!(call.node_type(), "Apply");
        assert_eq!(call.display_label(), "f (1 arg)");

        let vector: Node = Vector::new(vec![num("1"), num("2")]).into();
        assert_eq!(vector.display_label(), "2 elements");
        assert_eq!(Node::Empty.display_label(), "");
    }
}
