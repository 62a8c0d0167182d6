//! The expression tree, and the operations an editor performs on it.
//!
//! An [Expression] is usually built by [parse]-ing text, which produces a tree that has already
//! been [flattened](Expression::flatten): chains like `1+2+3` become one additive node with three
//! children rather than nested binary nodes. The tree can then be printed, copied and reordered.

mod expression;
pub use expression::*;

mod parser;
pub use parser::parse;

mod flatten;

mod serialize;
pub use serialize::*;

mod navigation;
