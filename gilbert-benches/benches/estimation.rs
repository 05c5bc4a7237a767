//! Criterion benchmarks for the path-length and clustering estimators.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gilbert_benches::{BENCH_SEED, bench_graph, params::bench_grid};
use gilbert_core::{average_path_length, clustering_coefficients};
use rand::{SeedableRng, rngs::SmallRng};

fn bench_path_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_path_length");
    for params in bench_grid() {
        let graph = bench_graph(params.nodes, params.edge_probability);
        group.bench_with_input(BenchmarkId::from_parameter(&params), &graph, |b, graph| {
            b.iter(|| {
                let mut rng = SmallRng::seed_from_u64(BENCH_SEED);
                average_path_length(graph, &mut rng).expect("benchmark graph is connected")
            });
        });
    }
    group.finish();
}

fn bench_clustering(c: &mut Criterion) {
    let mut group = c.benchmark_group("clustering_coefficients");
    for params in bench_grid() {
        let graph = bench_graph(params.nodes, params.edge_probability);
        group.bench_with_input(BenchmarkId::from_parameter(&params), &graph, |b, graph| {
            b.iter(|| clustering_coefficients(graph));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_path_length, bench_clustering);
criterion_main!(benches);
