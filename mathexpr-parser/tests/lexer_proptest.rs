//! Property-based tests for the lexer and parser
//!
//! Sources are generated from the grammar, without spaces, so the token lexemes
//! concatenate back to the exact input.

use mathexpr_parser::mathexpr::ast::Node;
use mathexpr_parser::mathexpr::lexing::tokenize;
use mathexpr_parser::mathexpr::parsing::parse;
use mathexpr_parser::mathexpr::token::{detokenize, Token, TokenKind};
use proptest::prelude::*;

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,4}",
        "[0-9]{1,3}(\\.[0-9]{0,2})?",
    ]
}

fn expression_strategy() -> impl Strategy<Value = String> {
    operand_strategy().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "**"]),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("{}{}{}", l, op, r)),
            inner.clone().prop_map(|e| format!("-{}", e)),
            inner.clone().prop_map(|e| format!("({})", e)),
            ("[a-z]{1,3}", prop::collection::vec(inner, 0..3))
                .prop_map(|(f, args)| format!("{}({})", f, args.join(","))),
        ]
    })
}

fn side_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => expression_strategy(),
        1 => prop::collection::vec(expression_strategy(), 1..4)
            .prop_map(|items| format!("[{}]", items.join(","))),
        1 => prop::collection::vec(expression_strategy(), 1..4)
            .prop_map(|items| format!("{{{}}}", items.join(","))),
    ]
}

fn statement_strategy() -> impl Strategy<Value = String> {
    (
        side_strategy(),
        prop::sample::select(vec!["=", "<=", ">=", "!=", "<", ">"]),
        side_strategy(),
    )
        .prop_map(|(l, op, r)| format!("{}{}{}", l, op, r))
}

fn program_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(statement_strategy(), 1..5)
}

fn kinds_and_lexemes(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|t| (t.kind(), t.lexeme().to_string()))
        .collect()
}

proptest! {
    #[test]
    fn test_lexemes_concatenate_to_source(statements in program_strategy()) {
        let source = statements.join("\n");
        let tokens = tokenize(&source).unwrap();
        let joined: String = tokens.iter().map(|t| t.lexeme()).collect();
        prop_assert_eq!(joined, source);
    }

    #[test]
    fn test_spans_index_the_source(statements in program_strategy()) {
        let source = statements.join("\n");
        let spaced = detokenize(&tokenize(&source).unwrap());
        for token in tokenize(&spaced).unwrap() {
            prop_assert_eq!(&spaced[token.span()], token.lexeme());
        }
    }

    #[test]
    fn test_exactly_one_end_of_input(statements in program_strategy()) {
        let tokens = tokenize(&statements.join("\n")).unwrap();
        let eof = tokens.iter().filter(|t| t.is_eof()).count();
        prop_assert_eq!(eof, 1);
        prop_assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_detokenize_preserves_tokens(statements in program_strategy()) {
        let source = statements.join("\n");
        let tokens = tokenize(&source).unwrap();
        let retokenized = tokenize(&detokenize(&tokens)).unwrap();
        prop_assert_eq!(kinds_and_lexemes(&retokenized), kinds_and_lexemes(&tokens));
    }

    #[test]
    fn test_generated_programs_parse(statements in program_strategy()) {
        let source = statements.join("\n");
        let node = parse(&source).unwrap();
        if statements.len() == 1 {
            prop_assert!(matches!(node, Node::Relation(_)));
        } else {
            match &node {
                Node::Sequence(seq) => prop_assert_eq!(seq.statements().len(), statements.len()),
                other => prop_assert!(false, "expected a sequence, got {}", other),
            }
        }

        let respaced = parse(&detokenize(&tokenize(&source).unwrap())).unwrap();
        prop_assert_eq!(respaced.to_string(), node.to_string());
    }

    #[test]
    fn test_lexer_never_panics(input in "\\PC{0,40}") {
        let _ = tokenize(&input);
        let _ = parse(&input);
    }
}
