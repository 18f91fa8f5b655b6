//! Criterion benchmarks for the autocorrect crate.
//!
//! Covers corpus analysis, candidate generation and correction at each tier.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use autocorrect::spelling::{Corrector, FrequencyTable, edits1, edits2};

/// Generate a synthetic corpus for benchmarking.
fn generate_corpus(word_count: usize) -> String {
    let words = [
        "spelling",
        "corrector",
        "frequency",
        "probability",
        "candidate",
        "dictionary",
        "language",
        "model",
        "the",
        "of",
        "and",
        "word",
        "words",
        "reader",
        "writer",
        "grateful",
        "happily",
        "something",
        "correction",
        "transpose",
    ];

    let mut corpus = String::with_capacity(word_count * 8);
    for i in 0..word_count {
        // Skewed distribution so frequencies differ
        let word = words[(i * i + i / 3) % words.len()];
        if i % 12 == 0 {
            corpus.push_str(". ");
            corpus.push_str(&word.to_uppercase());
        } else {
            corpus.push(' ');
            corpus.push_str(word);
        }
    }
    corpus
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    group.bench_function("edits1_something", |b| {
        b.iter(|| black_box(edits1(black_box("something"))))
    });

    group.sample_size(20);
    group.bench_function("edits2_something_count", |b| {
        b.iter(|| black_box(edits2(black_box("something")).count()))
    });

    group.finish();
}

fn bench_frequency_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_table");
    let corpus = generate_corpus(10_000);

    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("from_corpus_10k_words", |b| {
        b.iter(|| black_box(FrequencyTable::from_corpus(black_box(&corpus))))
    });

    group.finish();
}

fn bench_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction");
    group.sample_size(20);

    let corpus = generate_corpus(10_000);
    let table = FrequencyTable::from_corpus(&corpus).unwrap();
    let corrector = Corrector::new(&table);

    group.bench_function("exact", |b| {
        b.iter(|| black_box(corrector.correction(black_box("spelling"))))
    });

    group.bench_function("one_edit", |b| {
        b.iter(|| black_box(corrector.correction(black_box("speling"))))
    });

    group.bench_function("two_edits", |b| {
        b.iter(|| black_box(corrector.correction(black_box("korrectin"))))
    });

    group.bench_function("unknown", |b| {
        b.iter(|| black_box(corrector.correction(black_box("qzxvkjwpy"))))
    });

    let misspellings = ["speling", "frequensy", "dictionery", "langauge", "writr"];
    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("correct_all", |b| {
        b.iter(|| black_box(corrector.correct_all(black_box(&misspellings[..]))))
    });

    group.finish();
}

criterion_group!(benches, bench_edits, bench_frequency_table, bench_correction);
criterion_main!(benches);
