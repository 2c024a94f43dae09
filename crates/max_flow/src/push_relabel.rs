use crate::Flow;
use crate::FlowNetwork;

/// Preflow-push with highest-label selection, O(n^2 sqrt(m)).
///
/// Any active-vertex selection order yields a maximum flow; highest-label
/// only pins down the complexity bound, so stale (lower) bucket entries
/// left behind by a relabel are harmless and skipped lazily.
pub fn push_relabel(network: &FlowNetwork, source: usize, sink: usize) -> Flow {
    let n = network.vertex_count();
    assert!(source < n && sink < n, "terminal vertex out of range");
    if source == sink {
        return Flow::from_residual(network, 0);
    }

    let mut residual = network.clone();
    let mut height = vec![0_usize; n];
    let mut excess = vec![0_u128; n];
    let mut current_arc = vec![0_usize; n];
    height[source] = n;

    // Active vertices bucketed by height; `highest` is an upper bound on
    // the highest non-empty bucket.
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); 2 * n];
    let mut highest = 0;

    // Saturate every edge out of the source.
    for i in 0..residual.adj[source].len() {
        let e = residual.adj[source][i];
        let amount = residual.cap[e];
        if amount == 0 {
            continue;
        }
        let v = residual.to[e];
        residual.cap[e] = 0;
        residual.cap[e ^ 1] += amount;
        excess[v] += amount as u128;
        if v != source && v != sink {
            buckets[height[v]].push(v);
        }
    }

    while let Some(u) = pop_highest(&mut buckets, &mut highest) {
        if excess[u] == 0 {
            continue;
        }
        discharge(
            &mut residual,
            u,
            source,
            sink,
            &mut height,
            &mut excess,
            &mut current_arc,
            &mut buckets,
            &mut highest,
        );
    }

    let value = excess[sink] as u64;
    Flow::from_residual(&residual, value)
}

fn pop_highest(buckets: &mut [Vec<usize>], highest: &mut usize) -> Option<usize> {
    loop {
        if let Some(u) = buckets[*highest].pop() {
            return Some(u);
        }
        if *highest == 0 {
            return None;
        }
        *highest -= 1;
    }
}

/// Pushes `u`'s entire excess out, relabeling whenever the current arc
/// list is exhausted. The paired reverse edges guarantee a residual edge
/// back toward the source, so a relabel target always exists.
#[allow(clippy::too_many_arguments)]
fn discharge(
    residual: &mut FlowNetwork,
    u: usize,
    source: usize,
    sink: usize,
    height: &mut [usize],
    excess: &mut [u128],
    current_arc: &mut [usize],
    buckets: &mut [Vec<usize>],
    highest: &mut usize,
) {
    while excess[u] > 0 {
        if current_arc[u] == residual.adj[u].len() {
            // Relabel: one above the lowest admissible neighbor.
            let mut min_height = usize::MAX;
            for i in 0..residual.adj[u].len() {
                let e = residual.adj[u][i];
                if residual.cap[e] > 0 {
                    min_height = min_height.min(height[residual.to[e]]);
                }
            }
            debug_assert_ne!(min_height, usize::MAX, "active vertex lost all residual edges");
            height[u] = min_height + 1;
            current_arc[u] = 0;
            continue;
        }

        let e = residual.adj[u][current_arc[u]];
        let v = residual.to[e];
        if residual.cap[e] > 0 && height[u] == height[v] + 1 {
            let amount = excess[u].min(residual.cap[e] as u128) as u64;
            residual.cap[e] -= amount;
            residual.cap[e ^ 1] += amount;
            excess[u] -= amount as u128;
            let was_inactive = excess[v] == 0;
            excess[v] += amount as u128;
            if v != source && v != sink && was_inactive {
                buckets[height[v]].push(v);
                *highest = (*highest).max(height[v]);
            }
        } else {
            current_arc[u] += 1;
        }
    }
}
