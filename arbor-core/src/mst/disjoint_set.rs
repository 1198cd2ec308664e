//! Union-find (disjoint set union) backing Kruskal's algorithm.
//!
//! `find` compresses paths iteratively and `union` attaches the shallower
//! tree beneath the deeper one, giving amortised near-constant operations.
//! The structure also tracks how many disjoint groups remain so Kruskal's
//! clustering variant can stop once the requested count is reached.

use crate::error::{ArborError, Result};

/// Partition of the elements `0..len` into disjoint groups.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert_eq!(sets.group_count(), 4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.group_count(), 3);
/// assert_eq!(sets.find(0)?, sets.find(1)?);
/// # Ok::<(), arbor_core::ArborError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    groups: usize,
}

impl DisjointSet {
    /// Creates `len` singleton groups.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            groups: len,
        }
    }

    /// Returns the number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups
    }

    /// Returns the representative of the group containing `node`, pointing
    /// every node on the visited path directly at it.
    ///
    /// # Errors
    /// Returns [`ArborError::VertexOutOfRange`] when `node >= len()`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        self.check(node)?;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != current {
            let parent = self.parent[current];
            self.parent[current] = root;
            current = parent;
        }

        Ok(root)
    }

    /// Merges the groups containing `left` and `right`.
    ///
    /// Returns `true` when two distinct groups were merged, in which case
    /// [`group_count`](Self::group_count) drops by exactly one, and `false`
    /// when both already shared a group.
    ///
    /// # Errors
    /// Returns [`ArborError::VertexOutOfRange`] when either element is not
    /// tracked.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        let mut left = self.find(left)?;
        let mut right = self.find(right)?;
        if left == right {
            return Ok(false);
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.groups -= 1;
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a group.
    ///
    /// # Errors
    /// Returns [`ArborError::VertexOutOfRange`] when either element is not
    /// tracked.
    pub fn same_group(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check(&self, node: usize) -> Result<()> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(ArborError::VertexOutOfRange {
                vertex: node,
                vertex_count: self.parent.len(),
            })
        }
    }
}
