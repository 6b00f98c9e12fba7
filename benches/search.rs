//! Benchmarks for the search strategies on synthetic similarity graphs.
//!
//! Real graphs have a few thousand symbols with ~100 stored neighbours
//! each; the synthetic graphs here match that shape so relative numbers
//! carry over.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use glyphwalk::{
    CachedDistance, CachedNeighbours, SearchParams, SimilarityGraph, Strategy, StrokeEditDistance,
    Symbol,
};

const STROKE_INVENTORY: [&str; 8] = ["heng", "shu", "pie", "na", "dian", "ti", "zhe", "wan"];

fn synthetic_oracles(n: u32, degree: usize, seed: u64) -> (CachedNeighbours, CachedDistance) {
    let mut rng = StdRng::seed_from_u64(seed);
    let symbols: Vec<Symbol> = (0..n)
        .map(|i| Symbol(char::from_u32(0x4E00 + i).expect("valid CJK scalar")))
        .collect();

    let mut graph = SimilarityGraph::new(100);
    let mut sed = StrokeEditDistance::new();
    for &pivot in &symbols {
        let mut others: Vec<Symbol> = symbols.iter().copied().filter(|&s| s != pivot).collect();
        others.shuffle(&mut rng);
        others.truncate(degree);
        graph.insert(
            pivot,
            others
                .into_iter()
                .enumerate()
                .map(|(rank, s)| (s, 1.0 - rank as f32 * 0.005)),
        );

        let n_strokes = rng.random_range(2..20);
        sed.insert(
            pivot,
            (0..n_strokes).map(|_| STROKE_INVENTORY[rng.random_range(0..STROKE_INVENTORY.len())]),
        );
    }
    (CachedNeighbours::new(graph), CachedDistance::new(sed))
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let params = SearchParams {
        limit: 5,
        k: 15,
        error_rate: 0.0,
        max_frontier: 10_000,
    };

    for n in [500u32, 2000] {
        let (neighbours, sed) = synthetic_oracles(n, 100, 42);
        let mut pair_rng = StdRng::seed_from_u64(7);
        let pairs: Vec<(Symbol, Symbol)> = (0..64)
            .map(|_| {
                let q = pair_rng.random_range(0..n);
                let mut t = pair_rng.random_range(0..n);
                while t == q {
                    t = pair_rng.random_range(0..n);
                }
                (
                    Symbol(char::from_u32(0x4E00 + q).unwrap()),
                    Symbol(char::from_u32(0x4E00 + t).unwrap()),
                )
            })
            .collect();

        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), n),
                &pairs,
                |b, pairs| {
                    b.iter(|| {
                        let mut rng = StdRng::seed_from_u64(123_456_789);
                        let mut found = 0usize;
                        for &(q, t) in pairs {
                            if let Some(path) =
                                strategy.search(&neighbours, &sed, q, t, &params, &mut rng)
                            {
                                if path.last() == Some(&t) {
                                    found += 1;
                                }
                            }
                        }
                        found
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_stroke_distance(c: &mut Criterion) {
    let (_, sed) = synthetic_oracles(2000, 100, 42);
    let a = Symbol('\u{4E00}');
    let b = Symbol('\u{4E01}');

    c.bench_function("stroke_distance_cold_vs_cached", |bench| {
        // First call computes, the rest hit the memo table.
        bench.iter(|| sed.call(a, b).unwrap());
    });
}

criterion_group!(benches, bench_strategies, bench_stroke_distance);
criterion_main!(benches);
