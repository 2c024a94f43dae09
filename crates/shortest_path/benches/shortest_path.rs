use bench::configure_group;
use bench::default_rng;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use shortest_path::Dijkstra;
use shortest_path::DirectedGraph;
use std::hint::black_box;

const SIZES: [usize; 3] = [2_048, 8_192, 32_768];
const EDGES_PER_VERTEX: usize = 4;

fn random_graph(n: usize) -> DirectedGraph {
    let mut rng = default_rng();
    let edges: Vec<(u32, u32, u64)> = (0..n * EDGES_PER_VERTEX)
        .map(|_| {
            (
                rng.random_range(0..n) as u32,
                rng.random_range(0..n) as u32,
                rng.random_range(0..=1_000),
            )
        })
        .collect();
    DirectedGraph::from_edges(n, &edges)
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_sparse_random");

    for size in SIZES {
        configure_group(&mut group, size);
        let graph = random_graph(size);
        group.bench_function(BenchmarkId::from_parameter(size), |bencher| {
            bencher.iter(|| {
                let sp = Dijkstra::run(&graph, 0);
                black_box(sp.distance_to(size - 1))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
