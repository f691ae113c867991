// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query filtering and rendering.
//!
//! Throws arbitrary text at the filter and renderer over the directory
//! fixture to verify neither panics and the result caps always hold.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::contracts::check_results_from;
use sift::{parse_index, render_html, search, transform_for_url, ResultView, SearchIndex};
use std::fs;

fuzz_target!(|query: &[u8]| {
    // Fuzz tests run from the fuzz/ directory, so try both roots.
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| {
        ["fixtures/index.json", "../fixtures/index.json"]
            .iter()
            .find_map(|p| fs::read_to_string(p).ok())
            .and_then(|text| parse_index(&text).ok())
            .expect("Failed to load fixture index")
    });

    let query = String::from_utf8_lossy(query);

    // INVARIANT 1: blank queries are inactive, everything else searches
    let Some(results) = search(&query, index) else {
        assert!(query.trim().is_empty(), "Non-blank query {:?} was inactive", query);
        return;
    };

    // INVARIANT 2: caps hold
    assert!(results.businesses.len() <= 5);
    assert!(results.tags.len() <= 5);

    // INVARIANT 3: every result is an index entry, in index order
    check_results_from(&results, index);

    // INVARIANT 4: rendering never panics and never emits raw query markup
    let html = render_html(&ResultView::build(&results));
    assert!(!html.contains("<script"));

    // INVARIANT 5: slugs never contain whitespace
    let slug = transform_for_url(&query);
    assert!(!slug.chars().any(|c| c == ' ' || c == '\t' || c == '\n'));
});
