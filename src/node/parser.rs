use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};
use core::iter;

use log::{debug, trace};

use crate::error::ParseError;

use super::{Expression, Literal, Node, NodeId};

/// Parses `text` into a flattened expression tree.
///
/// The grammar, from lowest to highest precedence, is:
///
/// ```text
/// E := A | X
/// A := A+M | M
/// M := M*M | X
/// X := (E) | L
/// L := [0-9]+ | [a-z]
/// ```
///
/// Whitespace anywhere in `text` is ignored.
pub fn parse(text: &str) -> Result<Expression, ParseError> {
    check_characters(text)?;

    let input = text.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    check_balanced(&input)?;

    let mut parser = Parser { tree: Expression::empty() };
    let root = parser.parse_expression(&input)?;

    let mut tree = parser.tree;
    tree.root = root;
    tree.flatten();

    debug!("parsed `{}`:\n{}", input, tree.serialize(tree.root, 0));
    Ok(tree)
}

fn check_characters(text: &str) -> Result<(), ParseError> {
    for (position, character) in text.chars().enumerate() {
        let allowed = character.is_whitespace()
            || character.is_ascii_digit()
            || character.is_ascii_lowercase()
            || matches!(character, '+' | '*' | '(' | ')');

        if !allowed {
            return Err(ParseError::UnexpectedCharacter { character, position });
        }
    }

    Ok(())
}

fn check_balanced(input: &str) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for c in input.bytes() {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::UnbalancedParentheses(input.to_string()))?;
            }
            _ => (),
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(ParseError::UnbalancedParentheses(input.to_string()))
    }
}

/// Returns true if the first character of `s` is an opening parenthesis which is closed by the
/// last character of `s`.
fn wrapped_in_parentheses(s: &str) -> bool {
    if !s.starts_with('(') {
        return false;
    }

    let mut depth = 0usize;
    for (i, c) in s.bytes().enumerate() {
        match c {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == s.len() - 1;
                }
            }
            _ => (),
        }
    }

    false
}

/// Finds where to split `s`: the shallowest operator, preferring `+` to `*` at the same depth.
/// Returns the kind of node that operator builds, and the index of every occurrence of it at that
/// depth, from left to right.
fn find_split(s: &str) -> Option<(Node, Vec<usize>)> {
    // (depth, operator)
    let mut best: Option<(isize, u8)> = None;
    let mut positions = vec![];
    let mut depth = 0isize;

    for (i, c) in s.bytes().enumerate() {
        match c {
            b'(' => depth += 1,
            b')' => depth -= 1,

            b'+' | b'*' => {
                let replaces = best.map_or(true, |(d, op)| {
                    depth < d || (c == b'+' && depth == d && op == b'*')
                });

                if replaces {
                    best = Some((depth, c));
                    positions.clear();
                    positions.push(i);
                } else if best == Some((depth, c)) {
                    positions.push(i);
                }
            }

            _ => (),
        }
    }

    best.map(|(_, op)| {
        let node = if op == b'+' { Node::Additive } else { Node::Multiplicative };
        (node, positions)
    })
}

/// Builds nodes into a single expression arena by recursively splitting the input text.
///
/// A chain like `a+b+c` is split on all of its operators at once, so the recursion only goes as
/// deep as the nesting of the input.
struct Parser {
    tree: Expression,
}

impl Parser {
    fn parse_expression(&mut self, s: &str) -> Result<NodeId, ParseError> {
        if !s.bytes().any(|b| b.is_ascii_digit() || b.is_ascii_lowercase()) {
            return Err(ParseError::NoLiteral(s.to_string()));
        }

        if let Ok(literal) = Literal::new(s) {
            return Ok(self.tree.insert(Node::Literal(literal)));
        }

        if wrapped_in_parentheses(s) {
            let parens = self.tree.insert(Node::Parenthetical);
            let inner = self.parse_expression(&s[1..s.len() - 1])?;
            self.tree.add_child(parens, inner);
            return Ok(parens);
        }

        let (node, positions) = find_split(s).ok_or_else(|| ParseError::NoOperator(s.to_string()))?;
        trace!("splitting `{}` into {} operands of {:?}", s, positions.len() + 1, node);

        let op = self.tree.insert(node);
        let mut start = 0;
        for end in positions.into_iter().chain(iter::once(s.len())) {
            let operand = self.parse_expression(&s[start..end])?;
            self.tree.add_child(op, operand);
            start = end + 1;
        }

        Ok(op)
    }
}
