use crate::SegTreeError;
use crate::check_pos;
use crate::check_range;

/// Binary indexed tree over `i64`, 0-based.
#[derive(Clone, Debug)]
pub struct FenwickTree {
    len: usize,
    tree: Vec<i64>,
}

impl FenwickTree {
    pub fn new(n: usize) -> Self {
        Self {
            len: n,
            tree: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `delta` to position `pos`, O(log n).
    pub fn add(&mut self, pos: usize, delta: i64) -> Result<(), SegTreeError> {
        check_pos(pos, self.len)?;
        let mut i = pos;
        while i < self.len {
            self.tree[i] += delta;
            i |= i + 1;
        }
        Ok(())
    }

    /// Sum of `[0, pos)`, O(log n).
    pub fn prefix_sum(&self, pos: usize) -> Result<i64, SegTreeError> {
        if pos > self.len {
            return Err(SegTreeError::OutOfRange {
                index: pos,
                len: self.len,
            });
        }
        let mut sum = 0;
        let mut i = pos as isize - 1;
        while i >= 0 {
            sum += self.tree[i as usize];
            i = (i & (i + 1)) - 1;
        }
        Ok(sum)
    }

    /// Sum of the half-open range `[l, r)`, O(log n).
    pub fn range_sum(&self, l: usize, r: usize) -> Result<i64, SegTreeError> {
        check_range(l, r, self.len)?;
        Ok(self.prefix_sum(r)? - self.prefix_sum(l)?)
    }

    /// Smallest `pos` with `prefix_sum(pos + 1) >= x`, together with the
    /// prefix sum just before it. Requires all elements non-negative.
    /// Returns `(len, total)` when the total never reaches `x`.
    pub fn lower_bound(&self, x: i64) -> (usize, i64) {
        let mut remaining = x;
        let mut pos: isize = -1;
        let mut sum = 0;
        let mut step = self.len.next_power_of_two().max(1);
        while step > 0 {
            let probe = pos + step as isize;
            if (probe as usize) < self.len && self.tree[probe as usize] < remaining {
                remaining -= self.tree[probe as usize];
                sum += self.tree[probe as usize];
                pos = probe;
            }
            step >>= 1;
        }
        ((pos + 1) as usize, sum)
    }
}
