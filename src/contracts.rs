//! Runtime contracts for query results.
//!
//! Debug-mode assertions for the properties the results panel relies on.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the documented `ResultSet` invariants exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                      |
//! |--------------------------|-----------------------------------------------|
//! | `check_result_bounds`    | businesses ≤ 5, tags ≤ 5                      |
//! | `check_results_from`     | every result is an index entry, in index order|
//! | `check_slug`             | slugs contain no whitespace                   |

use crate::query::{MAX_BUSINESS_RESULTS, MAX_TAG_RESULTS};
use crate::types::{ResultSet, SearchIndex};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    // INVARIANT: the panel layout has room for five rows per capped section
    assert!(MAX_BUSINESS_RESULTS == 5);
    assert!(MAX_TAG_RESULTS == 5);
};

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check the size caps on a result set.
///
/// # Panics (debug builds only)
/// Panics if either capped collection is over its limit.
#[inline]
pub fn check_result_bounds(results: &ResultSet) {
    // INVARIANT: businesses ≤ MAX_BUSINESS_RESULTS
    debug_assert!(
        results.businesses.len() <= MAX_BUSINESS_RESULTS,
        "Contract violation: {} businesses > cap {}",
        results.businesses.len(),
        MAX_BUSINESS_RESULTS
    );
    // INVARIANT: tags ≤ MAX_TAG_RESULTS
    debug_assert!(
        results.tags.len() <= MAX_TAG_RESULTS,
        "Contract violation: {} tags > cap {}",
        results.tags.len(),
        MAX_TAG_RESULTS
    );
}

/// Check that each result list is an order-preserving subsequence of the
/// corresponding index list.
///
/// Quadratic in the worst case, so only call it from tests and debug paths.
pub fn check_results_from(results: &ResultSet, index: &SearchIndex) {
    // INVARIANT: stable order, no invented entries
    debug_assert!(
        is_subsequence(&results.categories, &index.categories),
        "Contract violation: categories are not a subsequence of the index"
    );
    debug_assert!(
        is_subsequence(&results.businesses, &index.businesses),
        "Contract violation: businesses are not a subsequence of the index"
    );
    debug_assert!(
        is_subsequence(&results.tags, &index.tags),
        "Contract violation: tags are not a subsequence of the index"
    );
}

/// Check that a slug is safe to drop into a path segment.
#[inline]
pub fn check_slug(slug: &str) {
    // INVARIANT: no whitespace survives slugging
    debug_assert!(
        !slug.chars().any(crate::utils::is_space),
        "Contract violation: slug '{}' contains whitespace",
        slug
    );
}

fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut remaining = haystack.iter();
    needle.iter().all(|item| remaining.any(|candidate| candidate == item))
}
