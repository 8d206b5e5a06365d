//! Olelo Benchmarks
//!
//! Criterion benchmarks for the dictionary trie and text restoration.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use std::time::Duration;

use olelo_lib::bench::synthetic_dictionary;
use olelo_lib::data_structures::LanaiTrie;
use olelo_lib::restore::{RestoreMode, TextRestorer};

const WORD_LENGTH: usize = 6;

fn build_trie(count: usize) -> LanaiTrie {
    synthetic_dictionary(count, WORD_LENGTH).into_iter().collect()
}

/// Benchmark building and mutating the Lanai Trie
fn bench_lanai_trie_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie_mutation");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000, 10_000, 50_000].iter() {
        let entries = synthetic_dictionary(*size, WORD_LENGTH);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("load_entries", size), &entries, |b, entries| {
            b.iter_batched(
                || entries.clone(),
                |entries| {
                    let mut trie = LanaiTrie::new();
                    black_box(trie.load_entries(entries))
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("delete_all", size), &entries, |b, entries| {
            b.iter_batched(
                || build_trie(entries.len()),
                |mut trie| {
                    for entry in entries {
                        black_box(trie.delete(&entry.word));
                    }
                    trie
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

/// Benchmark lookups and wildcard matching
fn bench_lanai_trie_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie_matching");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let trie = build_trie(50_000);
    let target = synthetic_dictionary(1, WORD_LENGTH)
        .pop()
        .map(|entry| entry.word)
        .unwrap_or_default();

    group.bench_function("search_hit", |b| b.iter(|| trie.search(black_box(&target))));

    for pattern in ["e*****", "e**t*e", "******", "**z***"] {
        group.bench_with_input(
            BenchmarkId::new("find_all_matches", pattern),
            &pattern,
            |b, pattern| b.iter(|| trie.find_all_matches_with_frequency(black_box(*pattern))),
        );
        group.bench_with_input(
            BenchmarkId::new("find_best_match", pattern),
            &pattern,
            |b, pattern| b.iter(|| trie.find_best_match(black_box(*pattern))),
        );
    }

    group.bench_function("words_with_prefix", |b| {
        b.iter(|| trie.words_with_prefix(black_box("ea")))
    });

    group.finish();
}

/// Benchmark restoring a damaged paragraph
fn bench_restore(c: &mut Criterion) {
    let mut group = c.benchmark_group("restore");
    group.measurement_time(Duration::from_secs(2));

    let trie = build_trie(10_000);
    let restorer = TextRestorer::new();
    let line = "Eta*ie t*e oth*r ***oin words *tao*n stay as they are e*****";
    let text: String = std::iter::repeat(line).take(100).collect::<Vec<_>>().join("\n");
    group.throughput(Throughput::Bytes(text.len() as u64));

    for mode in [RestoreMode::Best, RestoreMode::All] {
        group.bench_with_input(
            BenchmarkId::new("restore_text", format!("{mode:?}")),
            &mode,
            |b, mode| b.iter(|| restorer.restore_text(black_box(&text), &trie, *mode)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lanai_trie_mutation,
    bench_lanai_trie_matching,
    bench_restore
);
criterion_main!(benches);
