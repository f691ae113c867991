//! Benchmarks for the per-keystroke work: filter, build the view, render.
//!
//! Simulates realistic directory sizes:
//! - Small town:  ~50 businesses
//! - City:        ~500 businesses
//! - Metro:       ~5000 businesses
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sift::{filter, parse_index, render_html, transform_for_url, Business, Query, ResultView, SearchIndex};

// ============================================================================
// DIRECTORY SIMULATION
// ============================================================================

struct DirectorySize {
    name: &'static str,
    businesses: usize,
}

const DIRECTORY_SIZES: &[DirectorySize] = &[
    DirectorySize {
        name: "small",
        businesses: 50,
    },
    DirectorySize {
        name: "city",
        businesses: 500,
    },
    DirectorySize {
        name: "metro",
        businesses: 5000,
    },
];

const CATEGORIES: &[&str] = &[
    "Food & Drink",
    "Home Services",
    "Garden & Outdoor",
    "Pet Care",
    "Retail",
    "Health & Beauty",
    "Auto Repair",
    "Professional Services",
];

const TAGS: &[&str] = &[
    "pizza", "italian", "delivery", "plumbing", "emergency", "grooming", "books", "vinyl",
    "coffee", "bakery", "tires", "lawyer", "dentist", "florist", "yoga", "sushi",
];

const CONTENT_WORDS: &[&str] = &[
    "family", "owned", "since", "open", "late", "weekends", "local", "friendly", "fresh",
    "licensed", "insured", "award", "winning", "downtown", "parking", "available",
];

/// Deterministic pseudo-random directory (no rand dependency).
fn generate_directory(size: usize) -> SearchIndex {
    let mut seed: u64 = 0x5eed;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };

    let businesses = (0..size)
        .map(|i| {
            let tag_count = next() % 6;
            let content: Vec<&str> = (0..20).map(|_| CONTENT_WORDS[next() % CONTENT_WORDS.len()]).collect();
            Business {
                title: format!("{} {} #{}", TAGS[next() % TAGS.len()], "Shop", i),
                content: Some(content.join(" ")),
                categories: Some(vec![CATEGORIES[next() % CATEGORIES.len()].to_string()]),
                tags: Some((0..tag_count).map(|_| TAGS[next() % TAGS.len()].to_string()).collect()),
                ..Business::new("", &format!("/businesses/{}/", i))
            }
        })
        .collect();

    SearchIndex {
        businesses,
        categories: CATEGORIES.iter().map(|s| s.to_string()).collect(),
        tags: TAGS.iter().map(|s| s.to_string()).collect(),
    }
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in DIRECTORY_SIZES {
        let index = generate_directory(size.businesses);
        group.throughput(Throughput::Elements(size.businesses as u64));

        for raw in ["p", "pizza", "zzz"] {
            let query = Query::parse(raw).unwrap();
            group.bench_with_input(
                BenchmarkId::new(size.name, raw),
                &query,
                |b, query| b.iter(|| filter(black_box(query), black_box(&index))),
            );
        }
    }

    group.finish();
}

fn bench_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystroke");

    for size in DIRECTORY_SIZES {
        let index = generate_directory(size.businesses);
        let query = Query::parse("pizza").unwrap();
        group.bench_function(size.name, |b| {
            b.iter(|| {
                let results = filter(black_box(&query), &index);
                render_html(&ResultView::build(&results))
            })
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_index");

    for size in DIRECTORY_SIZES {
        let text = serde_json::to_string(&generate_directory(size.businesses)).unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(size.name, |b| b.iter(|| parse_index(black_box(&text))));
    }

    group.finish();
}

fn bench_slug(c: &mut Criterion) {
    c.bench_function("transform_for_url", |b| {
        b.iter(|| {
            for name in CATEGORIES {
                black_box(transform_for_url(black_box(name)));
            }
        })
    });
}

criterion_group!(benches, bench_filter, bench_keystroke, bench_parse, bench_slug);
criterion_main!(benches);
