use core::fmt;

/// Errors returned by [`crate::SegmentTree`] operations.
///
/// Every operation validates its arguments before touching the tree, so an error never leaves
/// the tree in a partially updated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SegmentTreeError {
    /// An index or interval bound lies outside the logical length.
    ///
    /// For `point_update` the valid indexes are `[0, len)`; for interval bounds they are
    /// `[0, len]`.
    OutOfRange { index: usize, len: usize },
    /// An interval was given with `start > end`.
    InvalidInterval { start: usize, end: usize },
}

impl fmt::Display for SegmentTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            Self::InvalidInterval { start, end } => {
                write!(f, "invalid interval [{start}, {end}): start is past end")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SegmentTreeError {}

pub type Result<T> = core::result::Result<T, SegmentTreeError>;
