use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use karger_cut::{karger, DisjointSet, Graph};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn barbell(k: u32) -> Graph<u32> {
    let mut graph = Graph::new();
    for offset in [0, k] {
        for u in offset..offset + k {
            for v in u + 1..offset + k {
                graph.add_edge(u, v);
            }
        }
    }
    graph.add_edge(k - 1, k);
    graph
}

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint_set");
    for &n in &[1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::new("union_chain", n), &n, |b, &n| {
            b.iter(|| {
                let mut ds = DisjointSet::with_capacity(n as usize);
                ds.make_set(0..n);
                for i in 1..n {
                    ds.union(&(i - 1), &i).unwrap();
                }
                black_box(ds.find(&0).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_min_cut(c: &mut Criterion) {
    let mut group = c.benchmark_group("karger");
    for &k in &[10u32, 40] {
        let graph = barbell(k);
        group.bench_with_input(BenchmarkId::new("single_trial", k), &graph, |b, graph| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(karger::min_cut(graph, &mut rng).unwrap().size()));
        });
        group.bench_with_input(BenchmarkId::new("par_64_trials", k), &graph, |b, graph| {
            b.iter(|| black_box(karger::par_karger_min_cut(graph, 64, 42).unwrap().size()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_disjoint_set, bench_min_cut);
criterion_main!(benches);
