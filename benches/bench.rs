//! Criterion benchmarks for Lancea.
//!
//! Covers the two hot paths: one-shot index construction and query
//! scoring against a built index.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lancea::document::Document;
use lancea::index::IndexBuilder;
use lancea::search::Searcher;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<Document> {
    let words = [
        "search", "engine", "full", "text", "index", "query", "document", "term", "score",
        "analysis", "tokenization", "normalization", "ranking", "relevance", "retrieval",
        "filtering", "memory", "storage", "performance", "library",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 10 + (i % 30);
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            doc_words.push(words[(i * 7 + j) % words.len()]);
        }
        documents.push(Document::new(i as u32 + 1, doc_words.join(" ")));
    }
    documents
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for &count in &[100usize, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("{count}_docs"), |b| {
            b.iter(|| {
                let documents = generate_test_documents(count);
                let builder = IndexBuilder::new().unwrap();
                black_box(builder.build(documents).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let documents = generate_test_documents(1000);
    let index = IndexBuilder::new().unwrap().build(documents).unwrap();
    let searcher = Searcher::new(&index).unwrap();

    let mut group = c.benchmark_group("search");

    group.bench_function("single_term", |b| {
        b.iter(|| black_box(searcher.search("search").unwrap()))
    });

    group.bench_function("multi_term", |b| {
        b.iter(|| black_box(searcher.search("search engine ranking relevance").unwrap()))
    });

    group.bench_function("unmatched_term", |b| {
        b.iter(|| black_box(searcher.search("zzzzz").unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_index_build, bench_search);
criterion_main!(benches);
