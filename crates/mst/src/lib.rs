use union_find::UnionFind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WeightedEdge {
    pub u: usize,
    pub v: usize,
    pub weight: u64,
}

impl WeightedEdge {
    pub fn new(u: usize, v: usize, weight: u64) -> Self {
        Self { u, v, weight }
    }
}

/// Result of Kruskal's algorithm: a minimum spanning forest (a tree when
/// the input graph is connected).
#[derive(Clone, Debug)]
pub struct MinSpanningForest {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
}

impl MinSpanningForest {
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// True when the forest spans all vertices as a single tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.vertex_count > 0 && self.edges.len() == self.vertex_count - 1
    }
}

/// Kruskal: sort edges by weight, keep an edge iff its endpoints are not
/// yet connected. Union-find answers the cycle check.
pub fn kruskal(vertex_count: usize, edges: &[WeightedEdge]) -> MinSpanningForest {
    let mut order: Vec<&WeightedEdge> = edges.iter().collect();
    order.sort_by_key(|e| e.weight);

    let mut uf = UnionFind::new(vertex_count);
    let mut kept = Vec::new();
    for edge in order {
        assert!(edge.u < vertex_count && edge.v < vertex_count, "edge endpoint out of range");
        if uf.unite(edge.u, edge.v) {
            kept.push(*edge);
            if kept.len() + 1 == vertex_count {
                break;
            }
        }
    }

    MinSpanningForest {
        vertex_count,
        edges: kept,
    }
}
