use alloc::vec::Vec;

/// Describes the movements which must be taken down a node tree to reach a particular node, as a
/// list of child indices starting from the root. An empty path refers to the root itself.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct NavPath {
    path: Vec<usize>,
}

impl NavPath {
    pub fn new(path: Vec<usize>) -> Self { Self { path } }

    /// A path to the root of a tree.
    pub fn root() -> Self { Self::default() }

    /// Returns true if this path refers to the root of a tree.
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Removes n entries from this path, moving it n levels up towards the root.
    pub fn pop(&mut self, n: usize) {
        for _ in 0..n {
            self.path.pop();
        }
    }

    /// Adds index to this path.
    pub fn push(&mut self, index: usize) {
        self.path.push(index);
    }

    /// Adds n to the final entry of this path, moving it between siblings.
    ///
    /// # Panics
    ///
    /// Panics if the path is the root path, or if the result would be negative.
    pub fn offset(&mut self, n: isize) {
        let last = self.path.last_mut().expect("cannot offset root path");
        *last = last.checked_add_signed(n).expect("path offset out of range");
    }

    /// The final entry of this path, i.e. the index of the node among its siblings.
    pub fn last(&self) -> Option<usize> {
        self.path.last().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.path
    }
}

impl core::ops::Index<usize> for NavPath {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.path[index]
    }
}
