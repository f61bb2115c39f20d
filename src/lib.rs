//! An iterative, array-backed segment tree.
//!
//! [`SegmentTree`] stores a fixed-length sequence of `i64` values in a single contiguous array
//! shaped as a complete binary tree, and supports:
//! - `point_update(index, value)` in `O(log n)`
//! - `range_sum(start, end)` over the half-open interval `[start, end)` in `O(log n)`
//!
//! Indexes are 0-based and intervals are half-open. Callers using 1-based or inclusive
//! conventions are expected to convert before calling in.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod state;
mod tree;


pub use error::{Result, SegmentTreeError};
pub use state::SegmentTreeState;
pub use tree::{SegmentTree, Values};
