use crate::SegTreeError;
use crate::check_pos;
use crate::check_range;
use crate::policy::LazyPolicy;

/// Lazy segment tree: a monoid aggregate per node plus a pending operator
/// that is pushed to the children the next time the node is visited.
///
/// Ranges are half-open. The logical length is padded up to a power of two;
/// padding leaves hold the data identity and are never targeted by an
/// operator, so they cannot corrupt an aggregate.
///
/// Construction is either `from_slice` (born built) or two-phase:
/// `new` + any number of `set` calls + one `build`. `update`/`query` on an
/// unbuilt tree fail with [`SegTreeError::NotBuilt`].
pub struct LazySegmentTree<P: LazyPolicy> {
    len: usize,
    leaf_count: usize,
    data: Vec<P::Data>,
    pending: Vec<P::Op>,
    built: bool,
}

impl<P: LazyPolicy> LazySegmentTree<P> {
    /// Empty (all-identity) tree over `n` logical positions, not yet built.
    pub fn new(n: usize) -> Self {
        let leaf_count = n.next_power_of_two().max(1);
        Self {
            len: n,
            leaf_count,
            data: vec![P::data_unit(); 2 * leaf_count - 1],
            pending: vec![P::op_unit(); 2 * leaf_count - 1],
            built: false,
        }
    }

    /// Built tree initialized from `values`, O(n).
    pub fn from_slice(values: &[P::Data]) -> Self {
        let mut tree = Self::new(values.len());
        for (pos, value) in values.iter().enumerate() {
            tree.data[tree.leaf_count - 1 + pos] = value.clone();
        }
        tree.build();
        tree
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Writes the initial value of position `pos` directly into its leaf,
    /// without touching ancestors. Only the last write per position counts.
    /// Rejected with [`SegTreeError::AlreadyBuilt`] once `build` has run,
    /// since the stale ancestors would make the write unobservable.
    pub fn set(&mut self, pos: usize, value: P::Data) -> Result<(), SegTreeError> {
        if self.built {
            return Err(SegTreeError::AlreadyBuilt);
        }
        check_pos(pos, self.len)?;
        self.data[self.leaf_count - 1 + pos] = value;
        Ok(())
    }

    /// Recomputes every internal node bottom-up, O(leaf_count). One-shot.
    pub fn build(&mut self) {
        debug_assert!(!self.built, "build() called twice");
        for node in (0..self.leaf_count - 1).rev() {
            self.data[node] = P::combine(&self.data[2 * node + 1], &self.data[2 * node + 2]);
        }
        self.built = true;
    }

    /// Applies `op` to every position in `[l, r)`, O(log n). An empty
    /// range is a no-op; a rejected call touches nothing.
    pub fn update(&mut self, l: usize, r: usize, op: P::Op) -> Result<(), SegTreeError> {
        if !self.built {
            return Err(SegTreeError::NotBuilt);
        }
        check_range(l, r, self.len)?;
        if l == r {
            return Ok(());
        }
        self.update_rec(0, 0, self.leaf_count, l, r, &op);
        Ok(())
    }

    /// Aggregate over `[l, r)`, O(log n). Empty range yields the identity.
    ///
    /// Resolves pending operators on the way down (a stale child aggregate
    /// must not be combined), but never changes any observable value.
    pub fn query(&mut self, l: usize, r: usize) -> Result<P::Data, SegTreeError> {
        if !self.built {
            return Err(SegTreeError::NotBuilt);
        }
        check_range(l, r, self.len)?;
        if l == r {
            return Ok(P::data_unit());
        }
        Ok(self.query_rec(0, 0, self.leaf_count, l, r))
    }

    /// Current value at position `pos`, O(log n).
    pub fn get(&mut self, pos: usize) -> Result<P::Data, SegTreeError> {
        check_pos(pos, self.len)?;
        self.query(pos, pos + 1)
    }

    /// Applies the node's pending operator to its own aggregate and defers
    /// it to the children. After this the aggregate is current for the
    /// node's whole segment.
    fn resolve(&mut self, node: usize, seg_len: usize) {
        let op = std::mem::replace(&mut self.pending[node], P::op_unit());
        if node < self.leaf_count - 1 {
            // The children's pending operators predate this one, so it
            // composes on the right (applied after).
            self.pending[2 * node + 1] = P::compose(&self.pending[2 * node + 1], &op);
            self.pending[2 * node + 2] = P::compose(&self.pending[2 * node + 2], &op);
        }
        self.data[node] = P::act(&self.data[node], &op, seg_len);
    }

    fn update_rec(
        &mut self,
        node: usize,
        seg_left: usize,
        seg_right: usize,
        l: usize,
        r: usize,
        op: &P::Op,
    ) {
        self.resolve(node, seg_right - seg_left);
        if l <= seg_left && seg_right <= r {
            // Fully covered: defer, then resolve immediately so the
            // aggregate stays current for this node's own segment.
            self.pending[node] = P::compose(&self.pending[node], op);
            self.resolve(node, seg_right - seg_left);
        } else if seg_left < r && l < seg_right {
            let mid = (seg_left + seg_right) / 2;
            self.update_rec(2 * node + 1, seg_left, mid, l, r, op);
            self.update_rec(2 * node + 2, mid, seg_right, l, r, op);
            self.data[node] = P::combine(&self.data[2 * node + 1], &self.data[2 * node + 2]);
        }
    }

    fn query_rec(
        &mut self,
        node: usize,
        seg_left: usize,
        seg_right: usize,
        l: usize,
        r: usize,
    ) -> P::Data {
        self.resolve(node, seg_right - seg_left);
        if l <= seg_left && seg_right <= r {
            return self.data[node].clone();
        }
        if seg_right <= l || r <= seg_left {
            return P::data_unit();
        }
        let mid = (seg_left + seg_right) / 2;
        let left = self.query_rec(2 * node + 1, seg_left, mid, l, r);
        let right = self.query_rec(2 * node + 2, mid, seg_right, l, r);
        P::combine(&left, &right)
    }
}

#[cfg(test)]
mod tests {
    use super::LazySegmentTree;
    use crate::SegTreeError;
    use crate::policy::{AssignAddSum, LazyOp, LazyPolicy, RangeAddSum};

    #[test]
    fn build_matches_fold() {
        for n in 0..40_usize {
            let values: Vec<i64> = (0..n as i64).map(|i| i * 7 % 13 - 5).collect();
            let mut tree = LazySegmentTree::<RangeAddSum>::new(n);
            for (i, &v) in values.iter().enumerate() {
                tree.set(i, v).unwrap();
            }
            tree.build();
            assert_eq!(tree.query(0, n).unwrap(), values.iter().sum::<i64>());
        }
    }

    #[test]
    fn update_before_build_fails() {
        let mut tree = LazySegmentTree::<RangeAddSum>::new(4);
        tree.set(0, 3).unwrap();
        assert_eq!(tree.update(0, 2, 1), Err(SegTreeError::NotBuilt));
        assert_eq!(tree.query(0, 4), Err(SegTreeError::NotBuilt));
        assert_eq!(tree.set(4, 0), Err(SegTreeError::OutOfRange { index: 4, len: 4 }));
        tree.build();
        assert_eq!(tree.query(0, 4).unwrap(), 3);
    }

    #[test]
    fn set_after_build_is_rejected() {
        let mut tree = LazySegmentTree::<RangeAddSum>::new(3);
        tree.set(0, 1).unwrap();
        tree.build();
        assert_eq!(tree.set(0, 9), Err(SegTreeError::AlreadyBuilt));
        assert_eq!(tree.query(0, 3).unwrap(), 1);

        let mut tree = LazySegmentTree::<RangeAddSum>::from_slice(&[4, 5]);
        assert_eq!(tree.set(1, 0), Err(SegTreeError::AlreadyBuilt));
        assert_eq!(tree.query(0, 2).unwrap(), 9);
    }

    #[test]
    fn empty_range_is_noop() {
        let mut tree = LazySegmentTree::<RangeAddSum>::from_slice(&[4, 2, 9]);
        for x in 0..=3 {
            assert_eq!(tree.query(x, x).unwrap(), 0);
            tree.update(x, x, 100).unwrap();
        }
        assert_eq!(tree.query(0, 3).unwrap(), 15);
    }

    #[test]
    fn identity_operator_is_noop() {
        let mut tree = LazySegmentTree::<AssignAddSum>::from_slice(&[1, 2, 3, 4, 5]);
        for l in 0..=5 {
            for r in l..=5 {
                tree.update(l, r, LazyOp { assign: None, add: 0 }).unwrap();
            }
        }
        for i in 0..5 {
            assert_eq!(tree.get(i).unwrap(), i as i64 + 1);
        }
    }

    #[test]
    fn point_update_via_range() {
        let mut tree = LazySegmentTree::<RangeAddSum>::from_slice(&[10, 20, 30, 40]);
        tree.update(2, 3, 5).unwrap();
        assert_eq!(tree.get(2).unwrap(), 35);
        for (i, expected) in [10, 20, 35, 40].into_iter().enumerate() {
            assert_eq!(tree.get(i).unwrap(), expected);
        }
    }

    #[test]
    fn composition_law_non_commutative() {
        // Two updates must be observably identical to one composed update,
        // including for assign/add where the order matters.
        let base = [3_i64, -1, 4, 1, -5, 9, 2, -6];
        let pairs = [
            (LazyOp::assign(7), LazyOp::add(2)),
            (LazyOp::add(2), LazyOp::assign(7)),
            (LazyOp::assign(1), LazyOp::assign(-4)),
            (LazyOp::add(3), LazyOp::add(-8)),
        ];
        for (o1, o2) in pairs {
            for l in 0..=base.len() {
                for r in l..=base.len() {
                    let mut seq = LazySegmentTree::<AssignAddSum>::from_slice(&base);
                    seq.update(l, r, o1).unwrap();
                    seq.update(l, r, o2).unwrap();

                    let mut composed = LazySegmentTree::<AssignAddSum>::from_slice(&base);
                    composed
                        .update(l, r, <AssignAddSum as LazyPolicy>::compose(&o1, &o2))
                        .unwrap();

                    for i in 0..base.len() {
                        assert_eq!(seq.get(i).unwrap(), composed.get(i).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn overlap_decomposition() {
        let mut tree =
            LazySegmentTree::<RangeAddSum>::from_slice(&[5, -2, 8, 0, 3, 3, -7, 1, 6]);
        tree.update(2, 7, 4).unwrap();
        let n = tree.len();
        for l in 0..=n {
            for r in l..=n {
                let whole = tree.query(l, r).unwrap();
                for m in l..=r {
                    let split = tree.query(l, m).unwrap() + tree.query(m, r).unwrap();
                    assert_eq!(whole, split, "l={l} m={m} r={r}");
                }
            }
        }
    }

    #[test]
    fn zero_length_tree() {
        let mut tree = LazySegmentTree::<RangeAddSum>::from_slice(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.query(0, 0).unwrap(), 0);
        tree.update(0, 0, 9).unwrap();
        assert_eq!(
            tree.query(0, 1),
            Err(SegTreeError::OutOfRange { index: 1, len: 0 })
        );
    }
}
