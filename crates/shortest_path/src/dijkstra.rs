use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::INF;
use crate::graph::DirectedGraph;

const NO_PARENT: usize = usize::MAX;

/// Single-source shortest paths with non-negative weights.
///
/// Runs eagerly on construction; distances and paths are then O(1) and
/// O(path length) lookups.
///
/// Distances saturate at [`INF`] (`u64::MAX / 4`), which doubles as the
/// unreachable sentinel: a vertex whose true distance reaches `INF` is
/// indistinguishable from an unreachable one and reports `None`.
#[derive(Clone, Debug)]
pub struct Dijkstra {
    source: usize,
    dist: Vec<u64>,
    parent: Vec<usize>,
}

impl Dijkstra {
    pub fn run(graph: &DirectedGraph, source: usize) -> Self {
        let n = graph.vertex_count();
        assert!(source < n, "source vertex out of range");

        let mut dist = vec![INF; n];
        let mut parent = vec![NO_PARENT; n];
        let mut heap = BinaryHeap::new();
        dist[source] = 0;
        heap.push(Reverse((0_u64, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if d != dist[u] {
                continue;
            }

            for edge in graph.out_edges(u) {
                let v = edge.to as usize;
                let cand = d.saturating_add(edge.weight).min(INF);
                if cand < dist[v] {
                    dist[v] = cand;
                    parent[v] = u;
                    heap.push(Reverse((cand, v)));
                }
            }
        }

        Self {
            source,
            dist,
            parent,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.dist[v] != INF
    }

    /// Shortest distance to `v`; `None` when unreachable (or when the
    /// distance reaches the [`INF`] cap).
    pub fn distance_to(&self, v: usize) -> Option<u64> {
        self.is_reachable(v).then(|| self.dist[v])
    }

    /// Vertices of one shortest path from the source to `v`, inclusive.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(v) {
            return None;
        }
        let mut path = vec![v];
        let mut cur = v;
        while cur != self.source {
            cur = self.parent[cur];
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}
