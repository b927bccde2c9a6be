//! Normalized call form
//!
//! Rendering desugars infix and prefix syntax into one uniform call representation:
//!
//!     Atom (call target)   Func("<name>")
//!     Atom (value)         atom("<lexeme>")
//!     Apply                <function>.eval(<arg>, ...)
//!     Vector               vector(<element>, ...)
//!     Set                  set(<element>, ...)
//!     Relation             <operator>(<left>, <right>)
//!     Sequence             statements joined by newlines
//!     Empty                (nothing)
//!
//! The wrapper names and the way operators are named are configurable through
//! [RenderOptions]. Rendering never fails: the match over node kinds is exhaustive.

use crate::mathexpr::ast::{Atom, Node};
use serde::{Deserialize, Serialize};

/// How an operator used as a function is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperatorStyle {
    /// `Func("+")`
    #[default]
    Lexeme,
    /// `Func("plus")`
    Name,
}

/// Naming convention of the normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub function_wrapper: String,
    pub atom_wrapper: String,
    pub apply_method: String,
    pub vector_name: String,
    pub set_name: String,
    pub operator_style: OperatorStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            function_wrapper: "Func".to_string(),
            atom_wrapper: "atom".to_string(),
            apply_method: "eval".to_string(),
            vector_name: "vector".to_string(),
            set_name: "set".to_string(),
            operator_style: OperatorStyle::Lexeme,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Renderer { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(&self, node: &Node) -> String {
        match node {
            Node::Atom(atom) => self.render_atom(atom),
            Node::Apply(apply) => format!(
                "{}.{}({})",
                self.render_atom(apply.function()),
                self.options.apply_method,
                self.render_all(apply.args(), ", ")
            ),
            Node::Vector(vector) => format!(
                "{}({})",
                self.options.vector_name,
                self.render_all(vector.elements(), ", ")
            ),
            Node::Set(set) => format!(
                "{}({})",
                self.options.set_name,
                self.render_all(set.elements(), ", ")
            ),
            Node::Relation(relation) => format!(
                "{}({}, {})",
                self.render_atom(relation.operator()),
                self.render(relation.left()),
                self.render(relation.right())
            ),
            Node::Sequence(sequence) => self.render_all(sequence.statements(), "\n"),
            Node::Empty => String::new(),
        }
    }

    fn render_atom(&self, atom: &Atom) -> String {
        let name = match (self.options.operator_style, atom.operator()) {
            (OperatorStyle::Name, Some(op)) => op.name(),
            _ => atom.lexeme(),
        };
        let wrapper = if atom.is_call_target() {
            &self.options.function_wrapper
        } else {
            &self.options.atom_wrapper
        };
        format!("{}(\"{}\")", wrapper, name)
    }

    fn render_all(&self, nodes: &[Node], separator: &str) -> String {
        nodes
            .iter()
            .map(|node| self.render(node))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Render with the default options.
pub fn render(node: &Node) -> String {
    Renderer::default().render(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathexpr::ast::{Apply, Relation, Sequence, Set, Vector};
    use crate::mathexpr::token::{Operator, Token};

    fn num(n: &str) -> Node {
        Atom::value(Token::number(n, 0)).into()
    }

    fn plus(left: Node, right: Node) -> Node {
        Apply::new(
            Atom::call_target(Token::operator(Operator::Plus, 0)),
            vec![left, right],
        )
        .into()
    }

    #[test]
    fn test_binary_operator() {
        assert_eq!(
            render(&plus(num("1"), num("2"))),
            r#"Func("+").eval(atom("1"), atom("2"))"#
        );
    }

    #[test]
    fn test_nested_application() {
        let node = plus(plus(num("1"), num("2")), num("3"));
        assert_eq!(
            render(&node),
            r#"Func("+").eval(Func("+").eval(atom("1"), atom("2")), atom("3"))"#
        );
    }

    #[test]
    fn test_containers() {
        let node: Node = Vector::new(vec![num("1"), Set::new(vec![num("2")]).into()]).into();
        assert_eq!(render(&node), r#"vector(atom("1"), set(atom("2")))"#);
    }

    #[test]
    fn test_relation_and_sequence() {
        let relation: Node = Relation::new(
            Atom::value(Token::identifier("x", 0)).into(),
            Atom::call_target(Token::operator(Operator::GreaterEqual, 0)),
            num("0"),
        )
        .into();
        let node: Node = Sequence::new(vec![Node::Empty, relation]).into();
        assert_eq!(render(&node), "\nFunc(\">=\")(atom(\"x\"), atom(\"0\"))");
    }

    #[test]
    fn test_operator_names() {
        let renderer = Renderer::new(RenderOptions {
            operator_style: OperatorStyle::Name,
            ..RenderOptions::default()
        });
        assert_eq!(
            renderer.render(&plus(num("1"), num("2"))),
            r#"Func("plus").eval(atom("1"), atom("2"))"#
        );
    }

    #[test]
    fn test_custom_wrappers() {
        let renderer = Renderer::new(RenderOptions {
            function_wrapper: "Fn".to_string(),
            atom_wrapper: "sym".to_string(),
            apply_method: "call".to_string(),
            vector_name: "vec".to_string(),
            set_name: "setof".to_string(),
            operator_style: OperatorStyle::Lexeme,
        });
        let node: Node = Vector::new(vec![plus(num("1"), num("2"))]).into();
        assert_eq!(
            renderer.render(&node),
            r#"vec(Fn("+").call(sym("1"), sym("2")))"#
        );
    }
}
