//! Criterion benchmarks for Intentia.
//!
//! Covers the main stages of query understanding:
//! - Normalization
//! - Entity extraction
//! - Full query parsing, with and without the cache

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use intentia::analysis::{CapabilitySet, Normalizer};
use intentia::entity::EntityExtractor;
use intentia::intent::SPELLING_CORRECTIONS;
use intentia::{ParserConfig, QueryParser};

const TEMPLATES: &[&str] = &[
    "Can u shwo me contract #{n}?",
    "what is the balance for account {n}00",
    "create user staff{n} and reset password",
    "Hello! I need the deets for policy number {n}.",
    "is the server down since 12/31/2023",
    "call 555-123-4567 about agreement {n}",
    "thanks, bye",
];

/// Generate distinct queries for benchmarking.
fn generate_queries(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let template = TEMPLATES[i % TEMPLATES.len()];
            template.replace("{n}", &(100_000 + i).to_string())
        })
        .collect()
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let normalizer = Normalizer::new(SPELLING_CORRECTIONS.iter().copied()).unwrap();
    let queries = generate_queries(100);

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("normalize_batch", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(normalizer.normalize(black_box(query)));
            }
        })
    });

    group.finish();
}

fn bench_entity_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity_extraction");
    let extractor = EntityExtractor::new().unwrap();
    let capabilities = CapabilitySet::heuristic();
    let queries = generate_queries(100);
    let tokenized: Vec<(String, Vec<String>)> = queries
        .iter()
        .map(|q| (q.clone(), capabilities.tokenize(q).unwrap()))
        .collect();

    group.throughput(Throughput::Elements(tokenized.len() as u64));
    group.bench_function("extract_batch", |b| {
        b.iter(|| {
            for (text, tokens) in &tokenized {
                let entities = extractor.extract(black_box(text), tokens, &capabilities);
                let _ = black_box(entities);
            }
        })
    });

    group.finish();
}

fn bench_parse_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_query");
    let queries = generate_queries(500);

    let uncached = QueryParser::new(ParserConfig {
        max_cache_size: 0,
        ..ParserConfig::default()
    })
    .unwrap();
    group.bench_function("uncached_single", |b| {
        b.iter(|| black_box(uncached.parse_query(black_box(&queries[0]))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("uncached_batch", |b| {
        b.iter(|| {
            for query in queries.iter().take(100) {
                black_box(uncached.parse_query(query));
            }
        })
    });

    let cached = QueryParser::new(ParserConfig::default()).unwrap();
    for query in queries.iter().take(100) {
        cached.parse_query(query);
    }
    group.bench_function("cached_batch", |b| {
        b.iter(|| {
            for query in queries.iter().take(100) {
                black_box(cached.parse_query(query));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_entity_extraction,
    bench_parse_query
);
criterion_main!(benches);
