//! Treeviz formatter for AST nodes
//!
//! One line per node, nesting encoded as 2 spaces per level:
//!
//!     <indentation><icon> <label>
//!
//! Labels are truncated to a configurable number of characters. The function of an
//! application and the operator of a relation are shown in their parent's label.
//!
//! Example for `x = f(1, [2, 3])`:
//!
//!     ≟ x = f(1, [2, 3])
//!       ◦ x
//!       ƒ f (2 args)
//!         ◦ 1
//!         ⟦ 2 elements
//!           ◦ 2
//!           ◦ 3
//!
//! Icons
//!     Sequence: ⧉
//!     Relation: ≟
//!     Apply: ƒ
//!     Atom: ◦
//!     Vector: ⟦
//!     Set: ⦃
//!     Empty: ∅

use crate::mathexpr::ast::{Apply, AstNode, Atom, Node, Relation, Sequence, Set, Vector, Visitor};

pub const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Sequence" => "⧉",
        "Relation" => "≟",
        "Apply" => "ƒ",
        "Atom" => "◦",
        "Vector" => "⟦",
        "Set" => "⦃",
        "Empty" => "∅",
        _ => "?",
    }
}

struct TreevizBuilder {
    output: String,
    depth: usize,
    label_width: usize,
}

impl TreevizBuilder {
    fn line(&mut self, node_type: &str, label: &str) {
        let indent = "  ".repeat(self.depth);
        let label = truncate(label, self.label_width);
        if label.is_empty() {
            self.output
                .push_str(&format!("{}{}\n", indent, get_icon(node_type)));
        } else {
            self.output
                .push_str(&format!("{}{} {}\n", indent, get_icon(node_type), label));
        }
    }

    fn open(&mut self, node: &dyn AstNode) {
        self.line(node.node_type(), &node.display_label());
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth -= 1;
    }
}

impl Visitor for TreevizBuilder {
    fn visit_atom(&mut self, atom: &Atom) {
        self.line(atom.node_type(), &atom.display_label());
    }

    fn visit_apply(&mut self, apply: &Apply) {
        self.open(apply);
    }
    fn leave_apply(&mut self, _apply: &Apply) {
        self.close();
    }

    fn visit_vector(&mut self, vector: &Vector) {
        self.open(vector);
    }
    fn leave_vector(&mut self, _vector: &Vector) {
        self.close();
    }

    fn visit_set(&mut self, set: &Set) {
        self.open(set);
    }
    fn leave_set(&mut self, _set: &Set) {
        self.close();
    }

    fn visit_relation(&mut self, relation: &Relation) {
        self.open(relation);
    }
    fn leave_relation(&mut self, _relation: &Relation) {
        self.close();
    }

    fn visit_sequence(&mut self, sequence: &Sequence) {
        self.open(sequence);
    }
    fn leave_sequence(&mut self, _sequence: &Sequence) {
        self.close();
    }

    fn visit_empty(&mut self) {
        self.line("Empty", "");
    }
}

/// Render `root` as a treeviz string, truncating labels to `label_width` characters.
pub fn to_treeviz_str(root: &Node, label_width: usize) -> String {
    let mut builder = TreevizBuilder {
        output: String::new(),
        depth: 0,
        label_width,
    };
    root.accept(&mut builder);
    builder.output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathexpr::parsing::parse;

    #[test]
    fn test_relation_tree() {
        let root = parse("x = f(1, [2, 3])").unwrap();
        let expected = "\
≟ x = f(1, [2, 3])
  ◦ x
  ƒ f (2 args)
    ◦ 1
    ⟦ 2 elements
      ◦ 2
      ◦ 3
";
        assert_eq!(to_treeviz_str(&root, DEFAULT_LABEL_WIDTH), expected);
    }

    #[test]
    fn test_sequence_with_empty_statement() {
        let root = parse("\nx = {1}").unwrap();
        let expected = "\
⧉ 2 statements
  ∅
  ≟ x = {1}
    ◦ x
    ⦃ 1 element
      ◦ 1
";
        assert_eq!(to_treeviz_str(&root, DEFAULT_LABEL_WIDTH), expected);
    }

    #[test]
    fn test_truncation() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");

        let root = parse("long_name = 1").unwrap();
        let tree = to_treeviz_str(&root, 4);
        assert!(tree.starts_with("≟ long...\n"));
    }
}
