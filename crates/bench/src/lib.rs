use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Measurement window for one bench group, keyed to input size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RuntimeBudget {
    pub sample_size: usize,
    pub warm_up_ms: u64,
    pub measurement_ms: u64,
}

/// Budgets for this workspace's benches. A union-find pass or a small
/// segment tree workload finishes in microseconds and can afford many
/// samples; a 262k-element lazy tree or a 32k-vertex Dijkstra run needs
/// a longer window to stabilize, so sample counts shrink as the window
/// grows.
pub fn runtime_budget(input_size: usize) -> RuntimeBudget {
    if input_size <= 4_096 {
        RuntimeBudget {
            sample_size: 20,
            warm_up_ms: 150,
            measurement_ms: 300,
        }
    } else if input_size <= 65_536 {
        RuntimeBudget {
            sample_size: 15,
            warm_up_ms: 400,
            measurement_ms: 900,
        }
    } else {
        RuntimeBudget {
            sample_size: 10,
            warm_up_ms: 700,
            measurement_ms: 1_800,
        }
    }
}

/// Applies the budget for `input_size` to a criterion group.
pub fn configure_group<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, input_size: usize) {
    let budget = runtime_budget(input_size);
    group.sample_size(budget.sample_size);
    group.warm_up_time(Duration::from_millis(budget.warm_up_ms));
    group.measurement_time(Duration::from_millis(budget.measurement_ms));
}

/// One fixed seed across all benches keeps workloads comparable run to run.
pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
