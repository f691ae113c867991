// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index decoding.
//!
//! Whatever the server sends, `parse_index` either returns an error or an
//! index the filter can run over. It never panics.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::{parse_index, search};

fuzz_target!(|body: &[u8]| {
    let Ok(text) = std::str::from_utf8(body) else {
        return;
    };

    let Ok(index) = parse_index(text) else {
        return;
    };

    // INVARIANT: any decoded index can be searched
    for query in ["a", "&", " e "] {
        let results = search(query, &index).expect("non-blank query is active");
        assert!(results.businesses.len() <= 5);
        assert!(results.tags.len() <= 5);
    }
});
