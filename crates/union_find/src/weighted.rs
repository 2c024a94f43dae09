/// Weights form an abelian group; commutativity is what lets potentials
/// accumulate along compressed paths in any order.
pub trait AbelianGroup {
    type Value: Clone;

    fn unit() -> Self::Value;
    fn op(a: &Self::Value, b: &Self::Value) -> Self::Value;
    fn inv(a: &Self::Value) -> Self::Value;
}

/// `i64` under addition.
pub struct AddGroup;

impl AbelianGroup for AddGroup {
    type Value = i64;

    fn unit() -> i64 {
        0
    }

    fn op(a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn inv(a: &i64) -> i64 {
        -a
    }
}

/// Union-find that tracks a potential per element: `diff(x, y)` answers
/// `weight(y) - weight(x)` for elements in the same set.
#[derive(Clone, Debug)]
pub struct WeightedUnionFind<G: AbelianGroup> {
    parent: Vec<usize>,
    size: Vec<usize>,
    /// Weight of the element relative to its (current) parent.
    diff: Vec<G::Value>,
}

impl<G: AbelianGroup> WeightedUnionFind<G> {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            diff: vec![G::unit(); n],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] == x {
            return x;
        }
        let root = self.find(self.parent[x]);
        // The parent is now compressed, so its diff is relative to the root.
        self.diff[x] = G::op(&self.diff[x], &self.diff[self.parent[x]]);
        self.parent[x] = root;
        root
    }

    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Weight of `x` relative to its root.
    pub fn weight(&mut self, x: usize) -> G::Value {
        self.find(x);
        self.diff[x].clone()
    }

    /// `weight(y) - weight(x)`. Only meaningful when `same(x, y)`.
    pub fn diff(&mut self, x: usize, y: usize) -> G::Value {
        let wy = self.weight(y);
        let wx = self.weight(x);
        G::op(&wy, &G::inv(&wx))
    }

    /// Merges so that `weight(y) - weight(x) == w`; `false` (and no
    /// change) when `x` and `y` are already in the same set.
    pub fn unite(&mut self, x: usize, y: usize, w: G::Value) -> bool {
        let mut w = G::op(&w, &self.weight(x));
        w = G::op(&w, &G::inv(&self.weight(y)));
        let mut x = self.find(x);
        let mut y = self.find(y);
        if x == y {
            return false;
        }
        if self.size[x] < self.size[y] {
            std::mem::swap(&mut x, &mut y);
            w = G::inv(&w);
        }
        self.parent[y] = x;
        self.size[x] += self.size[y];
        self.diff[y] = w;
        true
    }

    pub fn size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::{AddGroup, WeightedUnionFind};

    #[test]
    fn diffs_follow_unite_constraints() {
        let mut uf = WeightedUnionFind::<AddGroup>::new(5);
        assert!(uf.unite(0, 1, 3)); // w(1) - w(0) = 3
        assert!(uf.unite(1, 2, 4)); // w(2) - w(1) = 4
        assert_eq!(uf.diff(0, 2), 7);
        assert_eq!(uf.diff(2, 0), -7);
        assert_eq!(uf.diff(1, 1), 0);

        // Merge two nontrivial sets.
        assert!(uf.unite(3, 4, 10));
        assert!(uf.unite(2, 3, -5));
        assert_eq!(uf.diff(0, 4), 3 + 4 - 5 + 10);
        assert!(!uf.unite(0, 4, 0));
    }

    #[test]
    fn sizes_and_membership() {
        let mut uf = WeightedUnionFind::<AddGroup>::new(4);
        uf.unite(0, 1, 1);
        assert!(uf.same(0, 1));
        assert!(!uf.same(0, 2));
        assert_eq!(uf.size(1), 2);
        assert_eq!(uf.size(2), 1);
    }
}
