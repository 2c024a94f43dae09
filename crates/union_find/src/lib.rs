mod weighted;

pub use weighted::{AbelianGroup, AddGroup, WeightedUnionFind};

/// Disjoint set union with path compression and union by size.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `x`'s set, compressing the path on the way up.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] == x {
            return x;
        }
        let root = self.find(self.parent[x]);
        self.parent[x] = root;
        root
    }

    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Merges the sets of `x` and `y`; `false` if they were already one.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let mut x = self.find(x);
        let mut y = self.find(y);
        if x == y {
            return false;
        }
        if self.size[x] < self.size[y] {
            std::mem::swap(&mut x, &mut y);
        }
        self.parent[y] = x;
        self.size[x] += self.size[y];
        true
    }

    /// Size of the set containing `x`.
    pub fn size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::UnionFind;

    #[test]
    fn singletons_then_merges() {
        let mut uf = UnionFind::new(6);
        for i in 0..6 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.size(i), 1);
        }

        assert!(uf.unite(0, 1));
        assert!(uf.unite(2, 3));
        assert!(!uf.unite(1, 0));
        assert!(uf.same(0, 1));
        assert!(!uf.same(1, 2));
        assert_eq!(uf.size(0), 2);

        assert!(uf.unite(1, 3));
        assert!(uf.same(0, 2));
        assert_eq!(uf.size(3), 4);
        assert_eq!(uf.size(4), 1);
    }

    #[test]
    fn chain_compresses_to_one_root() {
        let mut uf = UnionFind::new(100);
        for i in 0..99 {
            uf.unite(i, i + 1);
        }
        let root = uf.find(0);
        for i in 0..100 {
            assert_eq!(uf.find(i), root);
        }
        assert_eq!(uf.size(42), 100);
    }
}
