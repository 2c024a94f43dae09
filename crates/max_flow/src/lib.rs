mod ford_fulkerson;
mod push_relabel;

pub use ford_fulkerson::ford_fulkerson;
pub use push_relabel::push_relabel;

/// Flow network with paired residual edges: forward edge `2k` and its
/// zero-capacity reverse `2k + 1` are stored adjacently, so `id ^ 1` is
/// always the companion edge.
#[derive(Clone, Debug)]
pub struct FlowNetwork {
    pub(crate) adj: Vec<Vec<usize>>,
    // (to, capacity) per residual edge
    pub(crate) to: Vec<usize>,
    pub(crate) cap: Vec<u64>,
}

impl FlowNetwork {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            to: Vec::new(),
            cap: Vec::new(),
        }
    }

    /// Adds a directed edge and returns its id (dense, in insertion order).
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: u64) -> usize {
        assert!(from < self.adj.len(), "from vertex out of range");
        assert!(to < self.adj.len(), "to vertex out of range");
        let id = self.to.len() / 2;
        self.adj[from].push(self.to.len());
        self.to.push(to);
        self.cap.push(capacity);
        self.adj[to].push(self.to.len());
        self.to.push(from);
        self.cap.push(0);
        id
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.to.len() / 2
    }
}

/// A computed maximum flow: total value plus per-edge flow amounts,
/// indexed by the ids `add_edge` handed out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Flow {
    value: u64,
    edge_flows: Vec<u64>,
}

impl Flow {
    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn edge_flow(&self, edge_id: usize) -> u64 {
        self.edge_flows[edge_id]
    }

    /// Reads flows out of a saturated residual network: whatever ended up
    /// on a reverse edge is the flow pushed through its forward twin.
    pub(crate) fn from_residual(network: &FlowNetwork, value: u64) -> Self {
        let edge_flows = (0..network.edge_count())
            .map(|id| network.cap[2 * id + 1])
            .collect();
        Self { value, edge_flows }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{FlowNetwork, ford_fulkerson, push_relabel};

    #[test]
    fn single_edge() {
        let mut net = FlowNetwork::new(2);
        let e = net.add_edge(0, 1, 7);
        for flow in [ford_fulkerson(&net, 0, 1), push_relabel(&net, 0, 1)] {
            assert_eq!(flow.value(), 7);
            assert_eq!(flow.edge_flow(e), 7);
        }
    }

    #[test]
    fn classic_textbook_network() {
        // Max flow 23 (CLRS figure 26.6 shape).
        let mut net = FlowNetwork::new(6);
        net.add_edge(0, 1, 16);
        net.add_edge(0, 2, 13);
        net.add_edge(1, 2, 10);
        net.add_edge(2, 1, 4);
        net.add_edge(1, 3, 12);
        net.add_edge(3, 2, 9);
        net.add_edge(2, 4, 14);
        net.add_edge(4, 3, 7);
        net.add_edge(3, 5, 20);
        net.add_edge(4, 5, 4);
        assert_eq!(ford_fulkerson(&net, 0, 5).value(), 23);
        assert_eq!(push_relabel(&net, 0, 5).value(), 23);
    }

    #[test]
    fn disconnected_sink_has_zero_flow() {
        let mut net = FlowNetwork::new(4);
        net.add_edge(0, 1, 5);
        net.add_edge(2, 3, 5);
        assert_eq!(ford_fulkerson(&net, 0, 3).value(), 0);
        assert_eq!(push_relabel(&net, 0, 3).value(), 0);
    }

    #[test]
    fn flow_decomposition_is_feasible() {
        let mut net = FlowNetwork::new(5);
        let caps = [(0, 1, 10), (0, 2, 6), (1, 2, 3), (1, 3, 5), (2, 3, 4), (2, 4, 7), (3, 4, 9)];
        let ids: Vec<usize> = caps.iter().map(|&(u, v, c)| net.add_edge(u, v, c)).collect();

        for flow in [ford_fulkerson(&net, 0, 4), push_relabel(&net, 0, 4)] {
            // Capacity constraints.
            for (&(_, _, cap), &id) in caps.iter().zip(&ids) {
                assert!(flow.edge_flow(id) <= cap);
            }
            // Conservation at interior vertices.
            for v in 1..4 {
                let inflow: u64 = caps
                    .iter()
                    .zip(&ids)
                    .filter(|&(&(_, to, _), _)| to == v)
                    .map(|(_, &id)| flow.edge_flow(id))
                    .sum();
                let outflow: u64 = caps
                    .iter()
                    .zip(&ids)
                    .filter(|&(&(from, _, _), _)| from == v)
                    .map(|(_, &id)| flow.edge_flow(id))
                    .sum();
                assert_eq!(inflow, outflow, "conservation at {v}");
            }
        }
    }

    #[test]
    fn algorithms_agree_on_random_networks() {
        let mut rng = StdRng::seed_from_u64(0xF10_0001);
        for round in 0..30 {
            let n = rng.random_range(2..16);
            let m = rng.random_range(1..40);
            let mut net = FlowNetwork::new(n);
            for _ in 0..m {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u != v {
                    net.add_edge(u, v, rng.random_range(0..=20));
                }
            }
            let s = 0;
            let t = n - 1;
            let a = ford_fulkerson(&net, s, t);
            let b = push_relabel(&net, s, t);
            assert_eq!(a.value(), b.value(), "round={round}");
        }
    }
}
