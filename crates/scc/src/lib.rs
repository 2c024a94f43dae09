mod topo;

pub use topo::TopologicalSort;

/// Strongly connected components by Kosaraju's two-pass algorithm.
///
/// Component ids are assigned in topological order of the condensation:
/// if there is an edge from component `a` to component `b`, then `a < b`.
#[derive(Clone, Debug)]
pub struct Scc {
    component: Vec<usize>,
    component_sizes: Vec<usize>,
}

impl Scc {
    /// Input is an adjacency list: `graph[u]` lists the successors of `u`.
    pub fn new(graph: &[Vec<usize>]) -> Self {
        let n = graph.len();
        let mut reversed = vec![Vec::new(); n];
        for (from, succs) in graph.iter().enumerate() {
            for &to in succs {
                assert!(to < n, "edge target out of range");
                reversed[to].push(from);
            }
        }

        // First pass: vertices in order of finishing time.
        let mut order = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        for start in 0..n {
            if visited[start] {
                continue;
            }
            // Iterative DFS; the extra edge-index stack records finish times.
            let mut stack = vec![(start, 0_usize)];
            visited[start] = true;
            while let Some(frame) = stack.last_mut() {
                let (u, next) = *frame;
                if next < graph[u].len() {
                    frame.1 += 1;
                    let v = graph[u][next];
                    if !visited[v] {
                        visited[v] = true;
                        stack.push((v, 0));
                    }
                } else {
                    order.push(u);
                    stack.pop();
                }
            }
        }

        // Second pass: reverse graph, reverse finishing order.
        let mut component = vec![usize::MAX; n];
        let mut component_sizes = Vec::new();
        for &start in order.iter().rev() {
            if component[start] != usize::MAX {
                continue;
            }
            let id = component_sizes.len();
            let mut size = 0;
            let mut stack = vec![start];
            component[start] = id;
            while let Some(u) = stack.pop() {
                size += 1;
                for &v in &reversed[u] {
                    if component[v] == usize::MAX {
                        component[v] = id;
                        stack.push(v);
                    }
                }
            }
            component_sizes.push(size);
        }

        Self {
            component,
            component_sizes,
        }
    }

    pub fn component_count(&self) -> usize {
        self.component_sizes.len()
    }

    /// Component id of vertex `u`.
    pub fn component_id(&self, u: usize) -> usize {
        self.component[u]
    }

    pub fn component_ids(&self) -> &[usize] {
        &self.component
    }

    pub fn same(&self, u: usize, v: usize) -> bool {
        self.component[u] == self.component[v]
    }

    pub fn component_size(&self, u: usize) -> usize {
        self.component_sizes[self.component[u]]
    }

    /// Components as vertex lists, in topological order of the condensation.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut out = vec![Vec::new(); self.component_sizes.len()];
        for (id, &size) in self.component_sizes.iter().enumerate() {
            out[id].reserve(size);
        }
        for (v, &id) in self.component.iter().enumerate() {
            out[id].push(v);
        }
        out
    }
}
