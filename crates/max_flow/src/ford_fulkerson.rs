use crate::Flow;
use crate::FlowNetwork;

/// Ford-Fulkerson with DFS augmenting paths, O(F * M).
pub fn ford_fulkerson(network: &FlowNetwork, source: usize, sink: usize) -> Flow {
    let n = network.vertex_count();
    assert!(source < n && sink < n, "terminal vertex out of range");
    if source == sink {
        return Flow::from_residual(network, 0);
    }

    let mut residual = network.clone();
    let mut value = 0;
    loop {
        let mut seen = vec![false; n];
        seen[source] = true;
        let Some(amount) = augment(&mut residual, source, sink, u64::MAX, &mut seen) else {
            break;
        };
        value += amount;
    }

    Flow::from_residual(&residual, value)
}

/// Pushes as much as `limit` along one residual path to the sink, found by
/// depth-first search. Returns the amount, or `None` when the sink is no
/// longer reachable.
fn augment(
    residual: &mut FlowNetwork,
    u: usize,
    sink: usize,
    limit: u64,
    seen: &mut [bool],
) -> Option<u64> {
    if u == sink {
        return Some(limit);
    }
    for i in 0..residual.adj[u].len() {
        let edge = residual.adj[u][i];
        let v = residual.to[edge];
        if seen[v] || residual.cap[edge] == 0 {
            continue;
        }
        seen[v] = true;
        if let Some(amount) = augment(residual, v, sink, limit.min(residual.cap[edge]), seen) {
            residual.cap[edge] -= amount;
            residual.cap[edge ^ 1] += amount;
            return Some(amount);
        }
    }
    None
}
