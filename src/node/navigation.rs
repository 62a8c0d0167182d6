//! Resolves [NavPath]s against an expression, and moves the node at a path between its siblings.

use alloc::vec;

use log::trace;

use crate::{error::NotFoundError, nav::NavPath};

use super::{Expression, NodeId};

impl Expression {
    /// Follows `path` from the root, returning the node it ends on, or `None` if any index along
    /// the way is out of range.
    pub fn resolve(&self, path: &NavPath) -> Option<NodeId> {
        path.as_slice()
            .iter()
            .try_fold(self.root, |node, index| self.children(node).get(*index).copied())
    }

    /// Builds the path from the root to `id` by walking up its parents. Returns `None` if `id` is
    /// detached from this expression's root.
    pub fn path_to(&self, id: NodeId) -> Option<NavPath> {
        let mut indices = vec![];
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            indices.push(self.children(parent).iter().position(|c| *c == current)?);
            current = parent;
        }

        if current != self.root {
            return None;
        }

        indices.reverse();
        Some(NavPath::new(indices))
    }

    /// Swaps the node at `path` with the sibling `offset` places after it (or before it, if
    /// negative), and updates `path` so that it still refers to the moved node.
    ///
    /// Fails if `path` does not resolve, refers to the root, or if there is no sibling at the
    /// requested position. The tree is unchanged on failure.
    pub fn shift(&mut self, path: &mut NavPath, offset: isize) -> Result<(), NotFoundError> {
        let node = self.resolve(path).ok_or(NotFoundError)?;
        let parent = self.parent(node).ok_or(NotFoundError)?;

        let index = path.last().ok_or(NotFoundError)?;
        let target = index.checked_add_signed(offset).ok_or(NotFoundError)?;
        let sibling = *self.children(parent).get(target).ok_or(NotFoundError)?;

        trace!("shifting {:?} from {} to {}", node, index, target);
        self.swap_children(parent, node, sibling)?;
        path.offset(offset);

        Ok(())
    }
}
