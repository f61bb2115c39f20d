use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::error::{Result, SegmentTreeError};
use crate::state::SegmentTreeState;

/// An iterative, array-backed segment tree over `i64` values with sum aggregation.
///
/// The tree is a single contiguous `Vec` addressed by implicit heap indexing: node `k` has
/// children `2k` and `2k + 1`, index `0` is unused, and the leaves occupy
/// `[capacity, 2 * capacity)` where `capacity` is the smallest power of two `>= len`.
/// Padding leaves hold `0` and are never observable through the public API.
///
/// Sums use wrapping (two's-complement) addition, so results agree with a naive wrapping sum
/// even when intermediate values overflow.
///
/// ```
/// use segment_tree::SegmentTree;
///
/// let mut tree = SegmentTree::build(&[5, 2, 8, 1, 9, 3]);
/// assert_eq!(tree.range_sum(0, 6), Ok(28));
///
/// tree.point_update(2, 0).unwrap();
/// assert_eq!(tree.range_sum(0, 6), Ok(20));
/// assert_eq!(tree.range_sum(2, 4), Ok(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentTree {
    nodes: Vec<i64>, // 1-indexed
    capacity: usize,
    len: usize,
}

impl SegmentTree {
    /// Creates an all-zero tree of logical length `len`.
    pub fn new(len: usize) -> Self {
        let capacity = capacity_for(len);
        sdebug!(len, capacity, "SegmentTree::new");
        Self {
            nodes: alloc::vec![0; 2 * capacity],
            capacity,
            len,
        }
    }

    /// Builds a tree over `values` in `O(capacity)`.
    pub fn build(values: &[i64]) -> Self {
        let len = values.len();
        let capacity = capacity_for(len);
        let mut nodes = alloc::vec![0i64; 2 * capacity];
        nodes[capacity..capacity + len].copy_from_slice(values);
        for k in (1..capacity).rev() {
            nodes[k] = nodes[2 * k].wrapping_add(nodes[2 * k + 1]);
        }
        sdebug!(len, capacity, "SegmentTree::build");
        Self {
            nodes,
            capacity,
            len,
        }
    }

    /// Rebuilds a tree from a snapshot taken with [`SegmentTree::state`].
    pub fn from_state(state: &SegmentTreeState) -> Self {
        Self::build(&state.values)
    }

    /// Returns a snapshot of the logical values.
    pub fn state(&self) -> SegmentTreeState {
        SegmentTreeState {
            values: self.to_vec(),
        }
    }

    /// Logical length `n` the tree was built with.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of leaves in the underlying complete binary tree (a power of two, at least 1).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the value at `index`, or `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<i64> {
        if index < self.len {
            Some(self.nodes[self.capacity + index])
        } else {
            None
        }
    }

    /// Sum of all logical values. Equivalent to `range_sum(0, len)` but `O(1)`.
    pub fn total(&self) -> i64 {
        self.nodes[1]
    }

    /// Sets the value at `index` and repairs the path up to the root.
    ///
    /// Only the `O(log capacity)` ancestors of the leaf are recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentTreeError::OutOfRange`] if `index >= len`. The tree is left unchanged.
    pub fn point_update(&mut self, index: usize, value: i64) -> Result<()> {
        if index >= self.len {
            swarn!(index, len = self.len, "SegmentTree::point_update: index out of range");
            return Err(SegmentTreeError::OutOfRange {
                index,
                len: self.len,
            });
        }

        let mut k = self.capacity + index;
        self.nodes[k] = value;
        k >>= 1;
        while k > 0 {
            self.nodes[k] = self.nodes[2 * k].wrapping_add(self.nodes[2 * k + 1]);
            k >>= 1;
        }
        strace!(index, value, "SegmentTree::point_update");
        Ok(())
    }

    /// Returns the sum over the half-open interval `[start, end)`.
    ///
    /// An empty interval (`start == end`) sums to `0`.
    ///
    /// # Errors
    ///
    /// - [`SegmentTreeError::InvalidInterval`] if `start > end`.
    /// - [`SegmentTreeError::OutOfRange`] if `end > len`.
    pub fn range_sum(&self, start: usize, end: usize) -> Result<i64> {
        self.check_interval(start, end)?;

        let mut sum = 0i64;
        let mut l = start + self.capacity;
        let mut r = end + self.capacity;
        while l < r {
            // Left boundary is a right child: its parent would overshoot, so peel it.
            if l & 1 == 1 {
                sum = sum.wrapping_add(self.nodes[l]);
                l += 1;
            }
            // Right boundary is exclusive: peel its left sibling.
            if r & 1 == 1 {
                r -= 1;
                sum = sum.wrapping_add(self.nodes[r]);
            }
            l >>= 1;
            r >>= 1;
        }
        strace!(start, end, sum, "SegmentTree::range_sum");
        Ok(sum)
    }

    /// Sum of the first `count` values, i.e. `range_sum(0, count)`.
    pub fn prefix_sum(&self, count: usize) -> Result<i64> {
        self.range_sum(0, count)
    }

    /// Iterates over the logical values in index order.
    pub fn values(&self) -> Values<'_> {
        Values {
            inner: self.leaves().iter(),
        }
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.leaves().to_vec()
    }

    fn leaves(&self) -> &[i64] {
        &self.nodes[self.capacity..self.capacity + self.len]
    }

    fn check_interval(&self, start: usize, end: usize) -> Result<()> {
        if start > end {
            swarn!(start, end, "SegmentTree: start is past end");
            return Err(SegmentTreeError::InvalidInterval { start, end });
        }
        if end > self.len {
            swarn!(end, len = self.len, "SegmentTree: interval end out of range");
            return Err(SegmentTreeError::OutOfRange {
                index: end,
                len: self.len,
            });
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &[i64] {
        &self.nodes
    }
}

impl From<Vec<i64>> for SegmentTree {
    fn from(values: Vec<i64>) -> Self {
        Self::build(&values)
    }
}

impl FromIterator<i64> for SegmentTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let values: Vec<i64> = iter.into_iter().collect();
        Self::build(&values)
    }
}

/// Iterator over the logical values of a [`SegmentTree`], created by [`SegmentTree::values`].
#[derive(Clone, Debug)]
pub struct Values<'a> {
    inner: core::slice::Iter<'a, i64>,
}

impl Iterator for Values<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Values<'_> {
    fn next_back(&mut self) -> Option<i64> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

/// Smallest power of two `>= len`, with an empty sequence still getting a single leaf.
fn capacity_for(len: usize) -> usize {
    len.max(1).next_power_of_two()
}
