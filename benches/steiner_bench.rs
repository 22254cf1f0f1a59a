//! Criterion benchmarks for u-steiner.
//!
//! Uses random complete graphs so the heuristic and the neighborhood work
//! on dense distance networks of growing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_steiner::graph::{Edge, Graph, NodeId};
use u_steiner::heuristic::HAlgorithm;
use u_steiner::paths::ShortestPaths;
use u_steiner::random::create_rng;
use u_steiner::sa::SaConfig;
use u_steiner::solver::SteinerSolver;

fn complete_graph(n: usize, seed: u64) -> Graph {
    let mut rng = create_rng(seed);
    let mut g = Graph::new();
    for u in 0..n {
        for v in (u + 1)..n {
            let w = rng.random_range(1.0..100.0);
            g.add_edge(Edge::new(NodeId(u), NodeId(v), w).unwrap())
                .unwrap();
        }
    }
    g
}

fn terminals(n: usize) -> Vec<NodeId> {
    (0..n).step_by(3).map(NodeId).collect()
}

fn bench_floyd_warshall(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_warshall");
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        let g = complete_graph(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &g, |b, g| {
            b.iter(|| black_box(ShortestPaths::new(black_box(g))))
        });
    }
    group.finish();
}

fn bench_h_algorithm(c: &mut Criterion) {
    let mut group = c.benchmark_group("h_algorithm");
    group.sample_size(10);

    for &n in &[20, 50, 100] {
        let g = complete_graph(n, 42);
        let paths = ShortestPaths::new(&g);
        let t = terminals(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(g, paths, t), |b, (g, p, t)| {
            b.iter(|| {
                let tree = HAlgorithm::new(black_box(g), t, p).steiner_tree();
                black_box(tree)
            })
        });
    }
    group.finish();
}

fn bench_sa_steiner(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_steiner");
    group.sample_size(10);

    for &n in &[20, 50] {
        let g = complete_graph(n, 42);
        let paths = ShortestPaths::new(&g);
        let t = terminals(n);
        let config = SaConfig::default()
            .with_stages(10)
            .with_iterations_per_stage(50)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(g, paths, t, config),
            |b, (g, p, t, c)| {
                b.iter(|| {
                    let result = SteinerSolver::solve_with_paths(black_box(g), t, p, c);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_floyd_warshall, bench_h_algorithm, bench_sa_steiner);
criterion_main!(benches);
