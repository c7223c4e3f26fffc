//! Criterion benchmarks for the detection pipeline
//!
//! The removal loop is O(V * E) per iteration (one Brandes pass), so the
//! betweenness engine dominates; it gets its own benchmark alongside the
//! full end-to-end loop.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use girvan_newman::{detect_communities, edge_betweenness, AdjacencyGraph, IndexBase};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// Ring of `cliques` cliques of `size` nodes each, joined by single bridges
fn ring_of_cliques(cliques: u32, size: u32) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for c in 0..cliques {
        let base = c * size;
        for i in 1..=size {
            for j in (i + 1)..=size {
                edges.push((base + i, base + j));
            }
        }
        // Bridge to the next clique around the ring
        let next = (c + 1) % cliques;
        edges.push((base + size, next * size + 1));
    }
    edges
}

fn bench_edge_betweenness(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_betweenness");

    for cliques in [4_u32, 8, 16] {
        let edges = ring_of_cliques(cliques, 5);
        let graph = AdjacencyGraph::from_edge_list(&edges, IndexBase::One);

        group.bench_with_input(BenchmarkId::new("ring_of_cliques", cliques), &graph, |b, graph| {
            b.iter(|| {
                let scores = edge_betweenness(black_box(graph));
                black_box(scores);
            });
        });
    }

    group.finish();
}

fn bench_full_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_communities");
    group.sample_size(20); // Each sample runs the whole removal sequence

    for cliques in [2_u32, 4] {
        let edges = ring_of_cliques(cliques, 4);
        let graph = AdjacencyGraph::from_edge_list(&edges, IndexBase::One);

        group.bench_with_input(BenchmarkId::new("ring_of_cliques", cliques), &graph, |b, graph| {
            b.iter_batched(
                || (graph.clone(), StdRng::seed_from_u64(42)),
                |(mut graph, mut rng)| {
                    let result = detect_communities(&mut graph, &mut rng, |_| {}).unwrap();
                    black_box(result);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edge_betweenness, bench_full_detection);
criterion_main!(benches);
