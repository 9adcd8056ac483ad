//! Criterion benchmarks for wordladder.
//!
//! Covers building a lexical graph from synthetic synsets, merging
//! per-category graphs and breadth-first ladder searches.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use wordladder::ladder::PathFinder;
use wordladder::lexicon::{Category, LexicalGraph, SynsetRecord, build, merge_all};

/// Generate overlapping synsets over a fixed vocabulary.
fn generate_synsets(count: usize, vocabulary: usize, seed: u64) -> Vec<SynsetRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let size = rng.random_range(2..6);
            SynsetRecord::new((0..size).map(|_| format!("w{}", rng.random_range(0..vocabulary))))
        })
        .collect()
}

fn category_graphs(count: usize, vocabulary: usize) -> Vec<LexicalGraph> {
    Category::ALL
        .iter()
        .enumerate()
        .map(|(i, &category)| build(generate_synsets(count, vocabulary, i as u64), category))
        .collect()
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    let records = generate_synsets(5000, 10000, 1);
    group.throughput(Throughput::Elements(records.len() as u64));

    group.bench_function("build_single_category", |b| {
        b.iter(|| {
            let graph = build(black_box(records.clone()), Category::Noun);
            black_box(graph)
        })
    });

    group.bench_function("merge_four_categories", |b| {
        b.iter_with_setup(
            || category_graphs(2000, 10000),
            |graphs| black_box(merge_all(graphs)),
        )
    });

    group.finish();
}

fn bench_ladder_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("ladder_search");
    group.sample_size(20); // Searches over the whole graph are slow

    let graph = merge_all(category_graphs(5000, 10000));
    let finder = PathFinder::new(&graph);
    let mut rng = StdRng::seed_from_u64(7);
    let words: Vec<&str> = graph.iter().map(|(word, _)| word).collect();
    let pairs: Vec<(&str, &str)> = (0..100)
        .map(|_| {
            (
                words[rng.random_range(0..words.len())],
                words[rng.random_range(0..words.len())],
            )
        })
        .collect();

    group.bench_function("neighbors", |b| {
        b.iter(|| {
            for (start, _) in &pairs {
                black_box(graph.neighbors(black_box(start)));
            }
        })
    });

    group.bench_function("find_path_random_pairs", |b| {
        b.iter(|| {
            for (start, end) in &pairs {
                let result = finder.find_path(black_box(start), black_box(end));
                black_box(result.ok());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_graph_build, bench_ladder_search);
criterion_main!(benches);
