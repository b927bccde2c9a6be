//! Fluent assertion API for AST nodes

use crate::mathexpr::ast::{Apply, AstNode, Node};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a node
pub fn assert_node(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn unexpected(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} `{}`",
            self.context,
            expected,
            self.node.node_type(),
            self.node
        )
    }

    /// Assert this node is an atom with the given lexeme
    pub fn atom(self, lexeme: &str) -> Self {
        match self.node {
            Node::Atom(atom) => assert_eq!(
                atom.lexeme(),
                lexeme,
                "{}: atom lexeme mismatch",
                self.context
            ),
            _ => self.unexpected(&format!("Atom `{}`", lexeme)),
        }
        self
    }

    /// Assert this node is the empty statement
    pub fn empty(self) -> Self {
        if !self.node.is_empty_statement() {
            self.unexpected("Empty");
        }
        self
    }

    /// Assert this node is an application of `function` with `arity` arguments
    pub fn apply(self, function: &str, arity: usize) -> ApplyAssertion<'a> {
        let apply = match self.node {
            Node::Apply(apply) => apply,
            _ => self.unexpected(&format!("Apply `{}`", function)),
        };
        assert_eq!(
            apply.function().lexeme(),
            function,
            "{}: function mismatch",
            self.context
        );
        assert_eq!(
            apply.arity(),
            arity,
            "{}: expected {} argument(s), found {} in `{}`",
            self.context,
            arity,
            apply.arity(),
            self.node
        );
        ApplyAssertion {
            apply,
            context: self.context,
        }
    }

    /// Assert this node is a vector and return element assertions
    pub fn vector(self) -> ContainerAssertion<'a> {
        match self.node {
            Node::Vector(v) => ContainerAssertion {
                elements: v.elements(),
                context: format!("{}.vector", self.context),
            },
            _ => self.unexpected("Vector"),
        }
    }

    /// Assert this node is a set and return element assertions
    pub fn set(self) -> ContainerAssertion<'a> {
        match self.node {
            Node::Set(s) => ContainerAssertion {
                elements: s.elements(),
                context: format!("{}.set", self.context),
            },
            _ => self.unexpected("Set"),
        }
    }

    /// Assert this node is a sequence and return statement assertions
    pub fn sequence(self) -> ContainerAssertion<'a> {
        match self.node {
            Node::Sequence(s) => ContainerAssertion {
                elements: s.statements(),
                context: format!("{}.sequence", self.context),
            },
            _ => self.unexpected("Sequence"),
        }
    }

    /// Assert this node is a relation with `operator` and check both sides
    pub fn relation<F>(self, operator: &str, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>, NodeAssertion<'a>),
    {
        let relation = match self.node {
            Node::Relation(r) => r,
            _ => self.unexpected(&format!("Relation `{}`", operator)),
        };
        assert_eq!(
            relation.operator().lexeme(),
            operator,
            "{}: relation operator mismatch",
            self.context
        );
        assertion(
            NodeAssertion {
                node: relation.left(),
                context: format!("{}.left", self.context),
            },
            NodeAssertion {
                node: relation.right(),
                context: format!("{}.right", self.context),
            },
        );
        self
    }

    /// Assert the structural rendering of this node
    pub fn displays_as(self, expected: &str) -> Self {
        assert_eq!(
            self.node.to_string(),
            expected,
            "{}: display mismatch",
            self.context
        );
        self
    }
}

// ============================================================================
// Apply Assertions
// ============================================================================

pub struct ApplyAssertion<'a> {
    apply: &'a Apply,
    context: String,
}

impl<'a> ApplyAssertion<'a> {
    /// Assert whether the function atom sits in function position.
    ///
    /// The parser marks both named callees and operators this way.
    pub fn call_target(self, expected: bool) -> Self {
        assert_eq!(
            self.apply.function().is_call_target(),
            expected,
            "{}: call target flag mismatch",
            self.context
        );
        self
    }

    /// Assert on a specific argument by index
    pub fn arg<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let args = self.apply.args();
        assert!(
            index < args.len(),
            "{}: Argument index {} out of bounds ({} arguments)",
            self.context,
            index,
            args.len()
        );
        assertion(NodeAssertion {
            node: &args[index],
            context: format!("{}.args[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Container Assertions
// ============================================================================

pub struct ContainerAssertion<'a> {
    elements: &'a [Node],
    context: String,
}

impl<'a> ContainerAssertion<'a> {
    /// Assert the number of children
    pub fn len(self, expected: usize) -> Self {
        assert_eq!(
            self.elements.len(),
            expected,
            "{}: Expected {} children, found {}",
            self.context,
            expected,
            self.elements.len()
        );
        self
    }

    /// Assert on a specific child by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.elements.len(),
            "{}: Item index {} out of bounds ({} children)",
            self.context,
            index,
            self.elements.len()
        );
        assertion(NodeAssertion {
            node: &self.elements[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathexpr::testing::parse_ok;

    #[test]
    fn test_nested_assertions() {
        let node = parse_ok("y = f(x, [1, {2}])");
        assert_node(&node).relation("=", |left, right| {
            left.atom("y");
            right
                .apply("f", 2)
                .call_target(true)
                .arg(0, |a| {
                    a.atom("x");
                })
                .arg(1, |a| {
                    a.vector().len(2).item(1, |s| {
                        s.set().len(1);
                    });
                });
        });
    }

    #[test]
    fn test_operator_application() {
        let node = parse_ok("a < b - c");
        assert_node(&node).relation("<", |_, right| {
            right
                .displays_as("-(b, c)")
                .apply("-", 2)
                .call_target(true)
                .arg(0, |a| {
                    a.atom("b");
                })
                .arg(1, |a| {
                    a.atom("c");
                });
        });
    }

    #[test]
    #[should_panic(expected = "call target flag mismatch")]
    fn test_operator_is_not_a_plain_value() {
        let node = parse_ok("y = -x");
        assert_node(&node).relation("=", |_, right| {
            right.apply("-", 1).call_target(false);
        });
    }

    #[test]
    #[should_panic(expected = "Expected Set")]
    fn test_wrong_variant_panics() {
        let node = parse_ok("x = [1]");
        assert_node(&node).relation("=", |_, right| {
            right.set();
        });
    }
}
