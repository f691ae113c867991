// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query filtering: the whole search "engine".
//!
//! No ranking, no stemming, no fuzziness. A record matches when the query is
//! a case-insensitive substring of one of its fields, and results come back in
//! the order the index lists them. What makes this worth a module is the
//! policy around it:
//!
//! - an empty (or all-whitespace) query is *no search*, not a search with
//!   zero results, so `Query::parse` returns `None` and the panel hides;
//! - businesses and tags are capped at five, categories are not;
//! - missing optional fields never match and never panic.

use std::fmt;

use crate::contracts::check_result_bounds;
use crate::types::{Business, ResultSet, SearchIndex};
use crate::utils::{contains_folded, normalize};

/// At most this many businesses are shown per query.
pub const MAX_BUSINESS_RESULTS: usize = 5;

/// At most this many tags are shown per query.
pub const MAX_TAG_RESULTS: usize = 5;

/// A lowercased, trimmed, non-empty query.
///
/// The only way to get one is `Query::parse`, so holding a `Query` means the
/// search is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Normalize raw input. `None` means "no active search".
    pub fn parse(raw: &str) -> Option<Query> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Query(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment of this query in `text`.
    #[inline]
    pub fn found_in(&self, text: &str) -> bool {
        contains_folded(text, &self.0)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Business {
    /// Title, content, any category or any tag contains the query.
    pub fn matches(&self, query: &Query) -> bool {
        query.found_in(&self.title)
            || self.content.as_deref().is_some_and(|c| query.found_in(c))
            || self.categories().iter().any(|c| query.found_in(c))
            || self.tags().iter().any(|t| query.found_in(t))
    }
}

/// Evaluate an active query against the index.
///
/// Pure: same inputs, same `ResultSet`, every time.
pub fn filter(query: &Query, index: &SearchIndex) -> ResultSet {
    let categories = index
        .categories
        .iter()
        .filter(|category| query.found_in(category))
        .cloned()
        .collect();

    let businesses = index
        .businesses
        .iter()
        .filter(|business| business.matches(query))
        .take(MAX_BUSINESS_RESULTS)
        .cloned()
        .collect();

    let tags = index
        .tags
        .iter()
        .filter(|tag| query.found_in(tag))
        .take(MAX_TAG_RESULTS)
        .cloned()
        .collect();

    let results = ResultSet {
        categories,
        businesses,
        tags,
    };
    check_result_bounds(&results);
    results
}

/// Parse and filter in one step. `None` is the inactive-search signal.
pub fn search(raw: &str, index: &SearchIndex) -> Option<ResultSet> {
    Query::parse(raw).map(|query| filter(&query, index))
}
