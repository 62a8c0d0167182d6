//! Textual forms of an expression tree: an indented outline for debugging, and the inline form
//! which an editor shows to the user.

use core::fmt;

use alloc::string::String;

use super::{Expression, Node, NodeId};

impl Expression {
    /// Produces an outline of the subtree at `id`, with one node per line and one tab of
    /// indentation per level of depth, starting at `indent_level`.
    ///
    /// A literal is just its text. A compound node is a line with its token, followed by each of
    /// its children one level deeper:
    ///
    /// ```text
    /// +
    ///     *
    ///         2
    ///         x
    ///     3
    /// ```
    pub fn serialize(&self, id: NodeId, indent_level: usize) -> String {
        let mut result = String::new();
        self.serialize_into(id, indent_level, &mut result);
        result
    }

    fn serialize_into(&self, id: NodeId, indent_level: usize, out: &mut String) {
        for _ in 0..indent_level {
            out.push('\t');
        }

        match self.node(id) {
            Node::Literal(l) => out.push_str(l.as_str()),
            node => {
                // Compound nodes always have a token
                out.push_str(node.token().unwrap_or_default());
                out.push('\n');

                for child in self.children(id) {
                    self.serialize_into(*child, indent_level + 1, out);
                    if !out.ends_with('\n') {
                        out.push('\n');
                    }
                }
            }
        }
    }

    /// Returns a value which displays the subtree at `id` inline, as it would be typed, e.g.
    /// `2*x+(3+y)`.
    pub fn display(&self, id: NodeId) -> Inline<'_> {
        Inline { expression: self, id }
    }
}

/// The inline form of a subtree. See [Expression::display].
#[derive(Clone, Copy)]
pub struct Inline<'a> {
    expression: &'a Expression,
    id: NodeId,
}

impl fmt::Display for Inline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let children = self.expression.children(self.id);

        match self.expression.node(self.id) {
            Node::Literal(l) => write!(f, "{}", l.as_str()),

            Node::Parenthetical => {
                write!(f, "(")?;
                for child in children {
                    write!(f, "{}", self.expression.display(*child))?;
                }
                write!(f, ")")
            }

            node @ (Node::Additive | Node::Multiplicative) => {
                let token = node.token().unwrap_or_default();
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", token)?;
                    }
                    write!(f, "{}", self.expression.display(*child))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display(self.root))
    }
}
