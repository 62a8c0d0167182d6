//! Property-based tests for parsing and flattening.
use exped::{parse, Expression, Node, NodeId};
use proptest::prelude::*;

mod strategies {
    use super::*;

    /// Generates a number or a single-letter variable.
    pub fn literal() -> impl Strategy<Value = String> {
        prop_oneof!["[0-9]{1,3}", "[a-z]"]
    }

    /// Generates well-formed expression text, with parentheses (sometimes doubled up), sums and
    /// products nested a few levels deep, and flat chains of several operands.
    pub fn expression() -> impl Strategy<Value = String> {
        literal().prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{}+{}", a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("{}*{}", a, b)),
                prop::collection::vec(inner.clone(), 3..12).prop_map(|ops| ops.join("+")),
                prop::collection::vec(inner.clone(), 3..12).prop_map(|ops| ops.join("*")),
                inner.clone().prop_map(|a| format!("({})", a)),
                inner.prop_map(|a| format!("(({}))", a)),
            ]
        })
    }

    /// Generates a long chain of literals joined by a single operator, with the operator used.
    pub fn flat_chain() -> impl Strategy<Value = (String, char)> {
        (prop::collection::vec(literal(), 1_000..5_000), prop_oneof![Just('+'), Just('*')])
            .prop_map(|(ops, op)| {
                let separator = op.to_string();
                (ops.join(separator.as_str()), op)
            })
    }
}

/// Splits well-formed expression text into its literal tokens, from left to right.
fn literal_tokens(text: &str) -> Vec<String> {
    let mut tokens = vec![];
    let mut digits = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if !digits.is_empty() {
            tokens.push(std::mem::take(&mut digits));
        }
        if c.is_ascii_lowercase() {
            tokens.push(c.to_string());
        }
    }
    if !digits.is_empty() {
        tokens.push(digits);
    }
    tokens
}

/// Checks parent links, single-child parentheticals and the absence of redundant nesting beneath
/// `id`.
fn check_well_formed(e: &Expression, id: NodeId) -> Result<(), TestCaseError> {
    if e.node(id) == &Node::Parenthetical {
        prop_assert_eq!(e.children(id).len(), 1);
    }

    for child in e.children(id) {
        prop_assert_eq!(e.parent(*child), Some(id));
        prop_assert!(!matches!(
            (e.node(id), e.node(*child)),
            (Node::Additive, Node::Additive) | (Node::Multiplicative, Node::Multiplicative)
        ));
        check_well_formed(e, *child)?;
    }
    Ok(())
}

/// Counts the parenthetical nodes beneath `id`, including `id` itself.
fn count_parentheticals(e: &Expression, id: NodeId) -> usize {
    let own = usize::from(e.node(id) == &Node::Parenthetical);
    own + e.children(id).iter().map(|c| count_parentheticals(e, *c)).sum::<usize>()
}

proptest! {
    #[test]
    fn test_literals_kept_in_order(text in strategies::expression()) {
        let e = parse(&text).unwrap();
        let literals = e.literals(e.root()).into_iter().map(String::from).collect::<Vec<_>>();
        prop_assert_eq!(literals, literal_tokens(&text));
    }

    #[test]
    fn test_parsed_tree_is_well_formed(text in strategies::expression()) {
        let e = parse(&text).unwrap();
        prop_assert_eq!(e.parent(e.root()), None);
        check_well_formed(&e, e.root())?;
    }

    #[test]
    fn test_every_parenthesis_pair_is_kept(text in strategies::expression()) {
        let e = parse(&text).unwrap();
        let pairs = text.matches('(').count();
        prop_assert_eq!(count_parentheticals(&e, e.root()), pairs);
    }

    #[test]
    fn test_flat_chain_is_one_node((text, op) in strategies::flat_chain()) {
        let e = parse(&text).unwrap();
        let expected = if op == '+' { Node::Additive } else { Node::Multiplicative };
        prop_assert_eq!(e.node(e.root()), &expected);
        prop_assert_eq!(e.children(e.root()).len(), text.matches(op).count() + 1);
        check_well_formed(&e, e.root())?;
    }

    #[test]
    fn test_flatten_idempotent(text in strategies::expression()) {
        let mut e = parse(&text).unwrap();
        let once = e.serialize(e.root(), 0);
        e.flatten();
        prop_assert_eq!(e.serialize(e.root(), 0), once);
    }

    #[test]
    fn test_inline_form_reparses(text in strategies::expression()) {
        let e = parse(&text).unwrap();
        let reparsed = parse(&e.to_string()).unwrap();
        prop_assert_eq!(reparsed.serialize(reparsed.root(), 0), e.serialize(e.root(), 0));
    }

    #[test]
    fn test_deep_copy_matches(text in strategies::expression()) {
        let e = parse(&text).unwrap();
        let copy = e.deep_copy(e.root());
        prop_assert_eq!(copy.serialize(copy.root(), 0), e.serialize(e.root(), 0));
        check_well_formed(&copy, copy.root())?;
    }

    #[test]
    fn test_arbitrary_text_never_panics(text in "[a-z0-9+*() A-Z-]{0,24}") {
        let _ = parse(&text);
    }
}
