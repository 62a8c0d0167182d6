use alloc::string::String;

use thiserror::Error;

/// Raised when input text cannot be reduced to an expression tree. No partial tree is ever
/// produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text (or an operand within it) contains neither a digit nor a lowercase letter, so there
    /// is nothing to build a literal from. This covers empty input and empty operands like `1+`.
    #[error("no literal content in `{0}`")]
    NoLiteral(String),

    /// The text is not a literal and not wrapped in parentheses, but has no operator which could
    /// split it into two operands.
    #[error("cannot split `{0}` on an operator")]
    NoOperator(String),

    /// Opening and closing parentheses do not pair up.
    #[error("unbalanced parentheses in `{0}`")]
    UnbalancedParentheses(String),

    /// A character outside of digits, lowercase letters, `+`, `*` and parentheses.
    #[error("unexpected character `{character}` at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// Raised when a node was expected to be a child of another node, but isn't.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("node is not a child of the target node")]
pub struct NotFoundError;

/// Raised when constructing a literal from text which is neither a run of digits nor a single
/// lowercase letter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid literal")]
pub struct LiteralError(pub String);
