//! The definition of the expression tree itself.
//!
//! Nodes live in an arena owned by an [Expression], and are referred to by [NodeId] handles. A
//! node's parent is stored as a handle too, so it is purely a means of walking upwards; only the
//! parent's list of children decides what belongs to the tree.

use alloc::{string::String, vec, vec::Vec};

use crate::error::{LiteralError, NotFoundError};

/// A handle to a node stored inside an [Expression].
///
/// Handles are only meaningful for the expression which created them. Using one with a different
/// expression will either panic or refer to an unrelated node.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy, Clone)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// The text of a literal: either a run of digits, or a single lowercase letter.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct Literal(String);

impl Literal {
    /// Validates `text` and wraps it into a `Literal`.
    pub fn new(text: impl Into<String>) -> Result<Self, LiteralError> {
        let text = text.into();
        if is_number(&text) || is_letter(&text) {
            Ok(Self(text))
        } else {
            Err(LiteralError(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true if `s` is made up of one or more ASCII digits.
fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `s` is exactly one lowercase ASCII letter.
fn is_letter(s: &str) -> bool {
    s.len() == 1 && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// The content of a single node, independent of where it sits in a tree.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum Node {
    /// A number or a variable. Literals never have children.
    Literal(Literal),

    /// A sum of all children.
    Additive,

    /// A product of all children.
    Multiplicative,

    /// A pair of parentheses around exactly one child.
    Parenthetical,
}

impl Node {
    /// The operator token for this kind of node, used when printing a tree. Literals have no
    /// token.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Node::Literal(_) => None,
            Node::Additive => Some("+"),
            Node::Multiplicative => Some("*"),
            Node::Parenthetical => Some("()"),
        }
    }

    /// Returns true for every variant which may have children.
    pub fn is_compound(&self) -> bool {
        !matches!(self, Node::Literal(_))
    }
}

/// Child edits queued against a node while its subtree is being flattened, applied in one go once
/// the node's children have all been visited.
#[derive(Debug, Clone, Default)]
pub(crate) struct Staged {
    pub(crate) additions: Vec<NodeId>,
    pub(crate) removals: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) node: Node,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) staged: Staged,
}

/// A tree of expression nodes with a single root.
///
/// Nodes which get detached from the tree (by flattening, for example) stay allocated until the
/// whole expression is dropped. Use [deep_copy](Expression::deep_copy) on the root to get a
/// compacted tree.
#[derive(Debug, Clone)]
pub struct Expression {
    pub(crate) slots: Vec<Slot>,
    pub(crate) root: NodeId,
}

impl Expression {
    /// Creates an expression consisting only of a root node.
    pub fn new(root: Node) -> Self {
        let mut expression = Self::empty();
        expression.root = expression.insert(root);
        expression
    }

    /// An expression with no slots at all. The root must be set before this is handed out.
    pub(crate) fn empty() -> Self {
        Self { slots: Vec::new(), root: NodeId(0) }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn slot(&self, id: NodeId) -> &Slot {
        &self.slots[id.index()]
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId) -> &mut Slot {
        &mut self.slots[id.index()]
    }

    /// The content of the given node.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.slot(id).node
    }

    /// The operator token of the given node; see [Node::token].
    pub fn token(&self, id: NodeId) -> Option<&'static str> {
        self.node(id).token()
    }

    /// The text of the given node, if it is a literal.
    pub fn literal_text(&self, id: NodeId) -> Option<&str> {
        match self.node(id) {
            Node::Literal(l) => Some(l.as_str()),
            _ => None,
        }
    }

    /// The children of the given node, in display order. Always empty for literals.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slot(id).children
    }

    /// The node which currently has the given node as a child, or `None` for the root and for
    /// detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).parent
    }

    /// Allocates a new node in this expression. It starts out detached; attach it somewhere with
    /// [add_child](Expression::add_child).
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot {
            node,
            parent: None,
            children: vec![],
            staged: Staged::default(),
        });
        id
    }

    /// Appends `child` to the children of `parent`. If `child` was already attached to a parent,
    /// it is removed from there first.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is a literal, or if `child` is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.node(parent).is_compound() {
            panic!("cannot add a child to a literal");
        }
        if self.ancestors(parent).any(|a| a == child) {
            panic!("cannot add a node beneath itself");
        }

        if let Some(old_parent) = self.parent(child) {
            self.slot_mut(old_parent).children.retain(|c| *c != child);
        }

        self.slot_mut(parent).children.push(child);
        self.slot_mut(child).parent = Some(parent);
    }

    /// Exchanges the positions of two children of `parent`.
    pub fn swap_children(
        &mut self,
        parent: NodeId,
        a: NodeId,
        b: NodeId,
    ) -> Result<(), NotFoundError> {
        let children = &mut self.slot_mut(parent).children;
        let a_index = children.iter().position(|c| *c == a).ok_or(NotFoundError)?;
        let b_index = children.iter().position(|c| *c == b).ok_or(NotFoundError)?;
        children.swap(a_index, b_index);

        Ok(())
    }

    /// Iterates over `id` and then each of its ancestors, up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(Some(id), move |n| self.parent(*n))
    }

    /// Returns a new expression containing a copy of the subtree at `id`. The copy shares nothing
    /// with this expression, and its root has no parent.
    pub fn deep_copy(&self, id: NodeId) -> Expression {
        let mut copy = Expression::new(self.node(id).clone());
        let root = copy.root;
        self.copy_children_into(id, &mut copy, root);
        copy
    }

    fn copy_children_into(&self, from: NodeId, copy: &mut Expression, to: NodeId) {
        for child in self.children(from) {
            let new_child = copy.insert(self.node(*child).clone());
            copy.add_child(to, new_child);
            self.copy_children_into(*child, copy, new_child);
        }
    }

    /// The text of every literal beneath `id`, from left to right.
    pub fn literals(&self, id: NodeId) -> Vec<&str> {
        let mut result = vec![];
        self.collect_literals(id, &mut result);
        result
    }

    fn collect_literals<'a>(&'a self, id: NodeId, result: &mut Vec<&'a str>) {
        match self.node(id) {
            Node::Literal(l) => result.push(l.as_str()),
            _ => {
                for child in self.children(id) {
                    self.collect_literals(*child, result);
                }
            }
        }
    }
}
