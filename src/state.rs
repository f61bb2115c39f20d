use alloc::vec::Vec;

/// A lightweight, serializable snapshot of a tree's logical values.
///
/// Only the leaves are captured; internal sums are recomputed by
/// [`crate::SegmentTree::from_state`], so a snapshot can never describe an inconsistent tree.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentTreeState {
    pub values: Vec<i64>,
}
