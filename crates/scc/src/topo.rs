use std::collections::VecDeque;

/// Kahn's algorithm. Cycles are reported through `is_sortable`, not an
/// error: an unsortable graph yields an empty order.
#[derive(Clone, Debug)]
pub struct TopologicalSort {
    vertex_count: usize,
    sorted: Vec<usize>,
}

impl TopologicalSort {
    pub fn new(graph: &[Vec<usize>]) -> Self {
        let n = graph.len();
        let mut in_degree = vec![0_usize; n];
        for succs in graph {
            for &v in succs {
                assert!(v < n, "edge target out of range");
                in_degree[v] += 1;
            }
        }

        let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
        let mut sorted = Vec::with_capacity(n);
        while let Some(u) = queue.pop_front() {
            sorted.push(u);
            for &v in &graph[u] {
                in_degree[v] -= 1;
                if in_degree[v] == 0 {
                    queue.push_back(v);
                }
            }
        }

        Self {
            vertex_count: n,
            sorted,
        }
    }

    /// False iff the graph contains a directed cycle.
    pub fn is_sortable(&self) -> bool {
        self.sorted.len() == self.vertex_count
    }

    /// The linear order, empty when the graph is not sortable.
    pub fn sorted(&self) -> &[usize] {
        if self.is_sortable() { &self.sorted } else { &[] }
    }
}
