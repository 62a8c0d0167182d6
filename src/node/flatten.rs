//! Removes redundant nesting of same-operator nodes from an [Expression].
//!
//! For example, the tree for `1+(2+3)` has no redundant nesting because of the parentheses, but the
//! tree for `1+2+3` is initially parsed as `1 + [2 + 3]`, which is converted to a single additive
//! node with three children.

use core::mem;

use log::trace;

use super::{Expression, Node, NodeId};

impl Expression {
    /// Flattens the whole tree. This is idempotent; flattening twice is the same as flattening
    /// once.
    pub fn flatten(&mut self) {
        self.flatten_subtree(self.root);
    }

    /// Flattens only the subtree beneath `id`. The node `id` itself is left in place even if it
    /// has the same operator as its parent.
    pub fn flatten_subtree(&mut self, id: NodeId) {
        for child in self.children(id).to_vec() {
            self.flatten_node(child);
        }
        self.commit_staged(id);
    }

    /// Flattens the subtree at `id`, then, if `id` has the same operator as its parent, queues
    /// `id`'s children to move up into the parent and `id` to be removed from it. The parent
    /// applies these once all of its own children have been visited.
    fn flatten_node(&mut self, id: NodeId) {
        self.flatten_subtree(id);

        let Some(parent) = self.parent(id) else { return };

        // Parentheticals are never merged, even into other parentheticals
        let same_operator = matches!(
            (self.node(id), self.node(parent)),
            (Node::Additive, Node::Additive) | (Node::Multiplicative, Node::Multiplicative)
        );
        if !same_operator {
            return;
        }

        let grandchildren = self.children(id).to_vec();
        trace!("splicing {} children of {:?} into {:?}", grandchildren.len(), id, parent);

        let staged = &mut self.slot_mut(parent).staged;
        staged.removals.push(id);
        staged.additions.extend(grandchildren);
    }

    /// Applies the additions and then the removals queued against `id`.
    fn commit_staged(&mut self, id: NodeId) {
        let staged = mem::take(&mut self.slot_mut(id).staged);

        for added in staged.additions {
            self.slot_mut(added).parent = Some(id);
            self.slot_mut(id).children.push(added);
        }

        for removed in staged.removals {
            self.slot_mut(id).children.retain(|c| *c != removed);

            // Its children now belong to `id`
            let slot = self.slot_mut(removed);
            slot.parent = None;
            slot.children.clear();
        }
    }
}
