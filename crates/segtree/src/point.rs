use crate::SegTreeError;
use crate::check_pos;
use crate::check_range;
use crate::policy::Monoid;

/// Point-update / range-query segment tree over a plain monoid.
pub struct SegmentTree<M: Monoid> {
    len: usize,
    leaf_count: usize,
    data: Vec<M::Data>,
}

impl<M: Monoid> SegmentTree<M> {
    pub fn new(n: usize) -> Self {
        let leaf_count = n.next_power_of_two().max(1);
        Self {
            len: n,
            leaf_count,
            data: vec![M::unit(); 2 * leaf_count - 1],
        }
    }

    pub fn from_slice(values: &[M::Data]) -> Self {
        let mut tree = Self::new(values.len());
        for (pos, value) in values.iter().enumerate() {
            tree.data[tree.leaf_count - 1 + pos] = value.clone();
        }
        for node in (0..tree.leaf_count - 1).rev() {
            tree.data[node] = M::combine(&tree.data[2 * node + 1], &tree.data[2 * node + 2]);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Overwrites position `pos` and recomputes its ancestors, O(log n).
    pub fn update(&mut self, pos: usize, value: M::Data) -> Result<(), SegTreeError> {
        check_pos(pos, self.len)?;
        let mut node = self.leaf_count - 1 + pos;
        self.data[node] = value;
        while node > 0 {
            node = (node - 1) / 2;
            self.data[node] = M::combine(&self.data[2 * node + 1], &self.data[2 * node + 2]);
        }
        Ok(())
    }

    /// Aggregate over the half-open range `[l, r)`, O(log n).
    pub fn query(&self, l: usize, r: usize) -> Result<M::Data, SegTreeError> {
        check_range(l, r, self.len)?;
        Ok(self.query_rec(0, 0, self.leaf_count, l, r))
    }

    /// Current value at `pos`, O(1).
    pub fn get(&self, pos: usize) -> Result<M::Data, SegTreeError> {
        check_pos(pos, self.len)?;
        Ok(self.data[self.leaf_count - 1 + pos].clone())
    }

    fn query_rec(&self, node: usize, seg_left: usize, seg_right: usize, l: usize, r: usize) -> M::Data {
        if seg_right <= l || r <= seg_left {
            return M::unit();
        }
        if l <= seg_left && seg_right <= r {
            return self.data[node].clone();
        }
        let mid = (seg_left + seg_right) / 2;
        let left = self.query_rec(2 * node + 1, seg_left, mid, l, r);
        let right = self.query_rec(2 * node + 2, mid, seg_right, l, r);
        M::combine(&left, &right)
    }
}
