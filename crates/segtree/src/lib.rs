mod fenwick;
mod lazy;
mod point;
pub mod policy;

use thiserror::Error;

pub use fenwick::FenwickTree;
pub use lazy::LazySegmentTree;
pub use point::SegmentTree;
pub use policy::{LazyPolicy, Monoid};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SegTreeError {
    /// Malformed range: `l > r`.
    #[error("invalid range: left bound {left} is greater than right bound {right}")]
    InvalidArgument { left: usize, right: usize },
    /// Position or range endpoint outside `[0, len]`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    /// `update`/`query` called on a two-phase tree before `build`.
    #[error("tree is not built yet; call build() first")]
    NotBuilt,
    /// `set` called after `build`; a leaf write would leave stale ancestors.
    #[error("tree is already built; set() is only valid before build()")]
    AlreadyBuilt,
}

/// Validates a half-open query/update range against the logical length.
///
/// Empty ranges (`l == r`) are fine anywhere in `[0, len]`.
fn check_range(left: usize, right: usize, len: usize) -> Result<(), SegTreeError> {
    if left > right {
        return Err(SegTreeError::InvalidArgument { left, right });
    }
    if right > len {
        return Err(SegTreeError::OutOfRange { index: right, len });
    }
    Ok(())
}

fn check_pos(pos: usize, len: usize) -> Result<(), SegTreeError> {
    if pos >= len {
        return Err(SegTreeError::OutOfRange { index: pos, len });
    }
    Ok(())
}
