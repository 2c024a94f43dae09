#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: u32,
    pub weight: u64,
}

/// Directed graph in compressed sparse row form.
#[derive(Clone, Debug)]
pub struct DirectedGraph {
    vertex_count: usize,
    offsets: Vec<usize>,
    to: Vec<u32>,
    weight: Vec<u64>,
}

impl DirectedGraph {
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut out_deg = vec![0_usize; vertex_count];
        for &(from, to, _) in edges {
            assert!((from as usize) < vertex_count, "from vertex out of range");
            assert!((to as usize) < vertex_count, "to vertex out of range");
            out_deg[from as usize] += 1;
        }

        let mut offsets = vec![0_usize; vertex_count + 1];
        for v in 0..vertex_count {
            offsets[v + 1] = offsets[v] + out_deg[v];
        }

        let mut to = vec![0_u32; edges.len()];
        let mut weight = vec![0_u64; edges.len()];
        let mut cursor = offsets[..vertex_count].to_vec();

        for &(from, dst, w) in edges {
            let idx = cursor[from as usize];
            cursor[from as usize] += 1;
            to[idx] = dst;
            weight[idx] = w;
        }

        Self {
            vertex_count,
            offsets,
            to,
            weight,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.to.len()
    }

    pub fn out_edges(&self, v: usize) -> impl Iterator<Item = Edge> + '_ {
        let lo = self.offsets[v];
        let hi = self.offsets[v + 1];
        (lo..hi).map(move |i| Edge {
            to: self.to[i],
            weight: self.weight[i],
        })
    }
}
